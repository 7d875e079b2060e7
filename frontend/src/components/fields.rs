//! Form controls bound to the controller's [`ProductForm`](crate::state::ProductForm).

use leptos::*;

use crate::state::FormField;
use crate::PageController;

fn field_value(ctrl: PageController, field: FormField) -> impl Fn() -> String + Copy {
    move || ctrl.form.with(|f| f.get(field).to_string())
}

/// Single-line text or number input.
#[component]
pub fn TextField(
    ctrl: PageController,
    field: FormField,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.key()>
                {field.label()}
                {field.is_required().then_some(" *")}
            </label>
            <input
                type=input_type
                id=field.key()
                name=field.key()
                placeholder=placeholder
                required=field.is_required()
                prop:value=field_value(ctrl, field)
                on:input=move |ev| ctrl.set_field(field, event_target_value(&ev))
            />
        </div>
    }
}

/// Multi-line input.
#[component]
pub fn TextAreaField(ctrl: PageController, field: FormField) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.key()>{field.label()}</label>
            <textarea
                id=field.key()
                name=field.key()
                rows="4"
                prop:value=field_value(ctrl, field)
                on:input=move |ev| ctrl.set_field(field, event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Drop-down with a blank "Select..." entry first.
#[component]
pub fn SelectField(
    ctrl: PageController,
    field: FormField,
    options: Vec<String>,
) -> impl IntoView {
    let current = field_value(ctrl, field);

    view! {
        <div class="form-group">
            <label for=field.key()>
                {field.label()}
                {field.is_required().then_some(" *")}
            </label>
            <select
                id=field.key()
                name=field.key()
                required=field.is_required()
                on:change=move |ev| ctrl.set_field(field, event_target_value(&ev))
            >
                <option value="" selected=move || current().is_empty()>"Select..."</option>
                {options
                    .into_iter()
                    .map(|option| {
                        let value = option.clone();
                        view! {
                            <option value=option.clone() selected=move || current() == value>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
