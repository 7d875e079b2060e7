//! Completion tracking over the required controls.

use super::form::{FormField, ProductForm};

/// `round(100 * filled / total)`, or 0 when there is nothing to fill.
pub fn completion_percent(filled: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (filled as f64 / total as f64 * 100.0).round() as u32
}

/// Share of required controls currently holding a non-whitespace value.
pub fn form_progress(form: &ProductForm) -> u32 {
    let required = FormField::ALL.iter().filter(|f| f.is_required());
    let (filled, total) = required.fold((0, 0), |(filled, total), field| {
        let has_value = !form.get(*field).trim().is_empty();
        (filled + usize::from(has_value), total + 1)
    });
    completion_percent(filled, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_required_fields_is_zero_percent() {
        assert_eq!(completion_percent(0, 0), 0);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(1, 2), 50);
        assert_eq!(completion_percent(9, 9), 100);
    }

    #[test]
    fn test_form_progress_counts_required_only() {
        let total = FormField::ALL.iter().filter(|f| f.is_required()).count();
        assert_eq!(form_progress(&ProductForm::default()), 0);

        // Optional fields do not move the bar.
        let form = ProductForm::default()
            .with(FormField::Description, "Handmade")
            .with(FormField::Color, "Gold");
        assert_eq!(form_progress(&form), 0);

        // Whitespace does not count as filled.
        let form = ProductForm::default()
            .with(FormField::ProductName, "Gold Ring")
            .with(FormField::Sku, "   ");
        assert_eq!(form_progress(&form), completion_percent(1, total));

        let full = FormField::ALL
            .iter()
            .fold(ProductForm::default(), |form, field| form.with(*field, "x"));
        assert_eq!(form_progress(&full), 100);
    }
}
