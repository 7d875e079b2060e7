//! Product form model, aggregation and validation.
//!
//! [`ProductForm`] mirrors the named controls of the listing form one to
//! one, as raw strings. Everything else is derived from it on demand:
//!
//! - [`collect_form_data`] builds the typed [`FormRecord`] snapshot
//! - [`validate_form`] applies the required-field and price rules
//! - [`ProductForm::to_form_data`] gives the flat mapping sent on export

use serde::Serialize;
use std::collections::BTreeMap;

use crate::Variant;

// =============================================================================
// Fields
// =============================================================================

/// Every named control of the listing form, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    ProductName,
    Sku,
    ProductType,
    Description,
    Mrp,
    SellingPrice,
    Inventory,
    HsnCode,
    Gst,
    Material,
    Color,
    Plating,
    Size,
    StoneType,
    Occasion,
    NetQuantity,
    NetWeight,
    Keywords,
}

impl FormField {
    pub const ALL: [FormField; 18] = [
        FormField::ProductName,
        FormField::Sku,
        FormField::ProductType,
        FormField::Description,
        FormField::Mrp,
        FormField::SellingPrice,
        FormField::Inventory,
        FormField::HsnCode,
        FormField::Gst,
        FormField::Material,
        FormField::Color,
        FormField::Plating,
        FormField::Size,
        FormField::StoneType,
        FormField::Occasion,
        FormField::NetQuantity,
        FormField::NetWeight,
        FormField::Keywords,
    ];

    /// The control's `name`, used as the submission key.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::ProductName => "productName",
            FormField::Sku => "sku",
            FormField::ProductType => "productType",
            FormField::Description => "description",
            FormField::Mrp => "product_mrp",
            FormField::SellingPrice => "meesho_price",
            FormField::Inventory => "inventory",
            FormField::HsnCode => "hsnCode",
            FormField::Gst => "gst",
            FormField::Material => "material",
            FormField::Color => "color",
            FormField::Plating => "plating",
            FormField::Size => "size",
            FormField::StoneType => "stoneType",
            FormField::Occasion => "occasion",
            FormField::NetQuantity => "netQuantity",
            FormField::NetWeight => "netWeight",
            FormField::Keywords => "keywords",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::ProductName => "Product Name",
            FormField::Sku => "SKU",
            FormField::ProductType => "Product Type",
            FormField::Description => "Description",
            FormField::Mrp => "MRP",
            FormField::SellingPrice => "Selling Price",
            FormField::Inventory => "Inventory",
            FormField::HsnCode => "HSN Code",
            FormField::Gst => "GST %",
            FormField::Material => "Material",
            FormField::Color => "Color",
            FormField::Plating => "Plating",
            FormField::Size => "Size",
            FormField::StoneType => "Stone Type",
            FormField::Occasion => "Occasion",
            FormField::NetQuantity => "Net Quantity",
            FormField::NetWeight => "Net Weight (g)",
            FormField::Keywords => "Keywords",
        }
    }

    /// Whether the control carries the `required` attribute.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FormField::ProductName
                | FormField::Sku
                | FormField::ProductType
                | FormField::Mrp
                | FormField::SellingPrice
                | FormField::Inventory
                | FormField::HsnCode
                | FormField::Gst
                | FormField::Material
        )
    }
}

// =============================================================================
// Live form
// =============================================================================

/// Current value of every form control, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    values: BTreeMap<&'static str, String>,
}

impl ProductForm {
    pub fn get(&self, field: FormField) -> &str {
        self.values.get(field.key()).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field.key(), value.into());
    }

    /// Builder-style setter, handy for seeding a form.
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Native form-submission mapping: every named control to its raw value.
    ///
    /// Keyed by control name, so it serializes as a JSON object with sorted
    /// keys. Empty controls are included as empty strings.
    pub fn to_form_data(&self) -> BTreeMap<String, String> {
        FormField::ALL
            .iter()
            .map(|field| (field.key().to_string(), self.get(*field).to_string()))
            .collect()
    }
}

// =============================================================================
// Form record
// =============================================================================

/// Typed snapshot of the form at the moment it was read.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub product_name: String,
    pub sku: String,
    pub product_type: String,
    pub description: String,
    pub mrp: f64,
    pub selling_price: f64,
    pub inventory: i64,
    pub hsn_code: String,
    pub material: String,
    pub color: String,
    pub plating: String,
    pub size: String,
    pub variants: Vec<Variant>,
}

/// Read every relevant field, coercing the numeric ones.
///
/// Unparsable numbers become 0.
pub fn collect_form_data(form: &ProductForm, variants: &[Variant]) -> FormRecord {
    FormRecord {
        product_name: form.get(FormField::ProductName).to_string(),
        sku: form.get(FormField::Sku).to_string(),
        product_type: form.get(FormField::ProductType).to_string(),
        description: form.get(FormField::Description).to_string(),
        mrp: parse_float(form.get(FormField::Mrp)),
        selling_price: parse_float(form.get(FormField::SellingPrice)),
        inventory: parse_int(form.get(FormField::Inventory)),
        hsn_code: form.get(FormField::HsnCode).to_string(),
        material: form.get(FormField::Material).to_string(),
        color: form.get(FormField::Color).to_string(),
        plating: form.get(FormField::Plating).to_string(),
        size: form.get(FormField::Size).to_string(),
        variants: variants.to_vec(),
    }
}

/// Re-collect the form and check every rule.
///
/// All violations are reported, not just the first one.
pub fn validate_form(form: &ProductForm, variants: &[Variant]) -> Result<FormRecord, Vec<String>> {
    let record = collect_form_data(form, variants);
    let mut errors = Vec::new();

    if record.product_name.trim().is_empty() {
        errors.push("Product Name is required".to_string());
    }
    if record.sku.trim().is_empty() {
        errors.push("SKU is required".to_string());
    }
    if record.product_type.trim().is_empty() {
        errors.push("Product Type is required".to_string());
    }
    if record.selling_price > record.mrp {
        errors.push("Selling Price cannot be higher than MRP".to_string());
    }

    if errors.is_empty() {
        Ok(record)
    } else {
        Err(errors)
    }
}

// =============================================================================
// Lenient numeric parsing
// =============================================================================

/// Longest leading numeric literal of `s`, or `""` if there is none.
fn numeric_prefix(s: &str, allow_fraction: bool) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if allow_fraction {
        if bytes.get(end) == Some(&b'.') {
            let mut frac_end = end + 1;
            while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            let frac_digits = frac_end - end - 1;
            if digits + frac_digits > 0 {
                digits += frac_digits;
                end = frac_end;
            }
        }
        if digits > 0 && matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
                exp_end += 1;
            }
            let exp_start = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_start {
                end = exp_end;
            }
        }
    }

    if digits == 0 {
        ""
    } else {
        &s[..end]
    }
}

/// Parse a leading decimal like a browser does, falling back to 0.
///
/// Literals too large for `f64` become infinite rather than 0.
pub fn parse_float(raw: &str) -> f64 {
    numeric_prefix(raw.trim_start(), true)
        .parse::<f64>()
        .unwrap_or(0.0)
}

/// Parse a leading integer like a browser does, falling back to 0.
///
/// Out-of-range integers saturate.
pub fn parse_int(raw: &str) -> i64 {
    let prefix = numeric_prefix(raw.trim_start(), false);
    match prefix.parse::<i64>() {
        Ok(value) => value,
        Err(_) if prefix.is_empty() => 0,
        Err(_) if prefix.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm::default()
            .with(FormField::ProductName, "Gold Bangle")
            .with(FormField::Sku, "BANGLE-001")
            .with(FormField::ProductType, "bangle")
            .with(FormField::Mrp, "1000")
            .with(FormField::SellingPrice, "800")
    }

    #[test]
    fn test_lenient_number_parsing() {
        assert_eq!(parse_float("1200"), 1200.0);
        assert_eq!(parse_float("  12.5kg"), 12.5);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("abc"), 0.0);
        assert_eq!(parse_float(""), 0.0);
        assert_eq!(parse_float("-"), 0.0);
        assert_eq!(parse_int("42"), 42);
        assert_eq!(parse_int("12.9"), 12);
        assert_eq!(parse_int("-3 pcs"), -3);
        assert_eq!(parse_int("pcs"), 0);
        assert_eq!(parse_int("99999999999999999999"), i64::MAX);
        assert_eq!(parse_int("-99999999999999999999"), i64::MIN);
    }

    #[test]
    fn test_overflowing_literals_stay_infinite() {
        assert_eq!(parse_float("1e400"), f64::INFINITY);
        assert_eq!(parse_float("-1e400"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_collect_coerces_numbers() {
        let form = valid_form()
            .with(FormField::Inventory, "ten")
            .with(FormField::Mrp, "not a price");
        let record = collect_form_data(&form, &[]);
        assert_eq!(record.mrp, 0.0);
        assert_eq!(record.selling_price, 800.0);
        assert_eq!(record.inventory, 0);
        assert_eq!(record.product_name, "Gold Bangle");
    }

    #[test]
    fn test_collect_includes_session_variants() {
        let variants = vec![Variant { size: "2.4\"".into(), sku: "B-24".into() }];
        let record = collect_form_data(&valid_form(), &variants);
        assert_eq!(record.variants, variants);
    }

    #[test]
    fn test_valid_form_passes() {
        let record = validate_form(&valid_form(), &[]).unwrap();
        assert_eq!(record.sku, "BANGLE-001");
    }

    #[test]
    fn test_each_required_field_is_reported() {
        let cases = [
            (FormField::ProductName, "Product Name is required"),
            (FormField::Sku, "SKU is required"),
            (FormField::ProductType, "Product Type is required"),
        ];
        for (field, message) in cases {
            for blank in ["", "   "] {
                let form = valid_form().with(field, blank);
                let errors = validate_form(&form, &[]).unwrap_err();
                assert!(
                    errors.iter().any(|e| e == message),
                    "{:?} = {:?} should report {:?}, got {:?}",
                    field,
                    blank,
                    message,
                    errors
                );
            }
        }
    }

    #[test]
    fn test_all_violations_are_accumulated() {
        let form = ProductForm::default()
            .with(FormField::Mrp, "100")
            .with(FormField::SellingPrice, "150");
        let errors = validate_form(&form, &[]).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_price_above_mrp_fails() {
        let form = ProductForm::default()
            .with(FormField::ProductName, "Gold Ring")
            .with(FormField::Sku, "R1")
            .with(FormField::ProductType, "ring")
            .with(FormField::Mrp, "1000")
            .with(FormField::SellingPrice, "1200");
        let errors = validate_form(&form, &[]).unwrap_err();
        assert_eq!(errors, vec!["Selling Price cannot be higher than MRP".to_string()]);
        assert!(errors[0].contains("Price"));
    }

    #[test]
    fn test_overflowing_price_still_exceeds_mrp() {
        let form = valid_form()
            .with(FormField::Mrp, "1000")
            .with(FormField::SellingPrice, "1e400");
        let errors = validate_form(&form, &[]).unwrap_err();
        assert_eq!(errors, vec!["Selling Price cannot be higher than MRP".to_string()]);
    }

    #[test]
    fn test_price_equal_to_mrp_passes() {
        let form = valid_form().with(FormField::SellingPrice, "1000");
        assert!(validate_form(&form, &[]).is_ok());
    }

    #[test]
    fn test_form_data_contains_every_control() {
        let form = valid_form().with(FormField::Gst, "3");
        let data = form.to_form_data();
        assert_eq!(data.len(), FormField::ALL.len());
        assert_eq!(data["productName"], "Gold Bangle");
        assert_eq!(data["product_mrp"], "1000");
        assert_eq!(data["meesho_price"], "800");
        assert_eq!(data["gst"], "3");
        // Untouched controls still submit as empty strings.
        assert_eq!(data["keywords"], "");
        assert!(!data.contains_key("variants"));
    }

    #[test]
    fn test_form_data_serializes_in_key_order() {
        let json = serde_json::to_string(&valid_form().to_form_data()).unwrap();
        let gst = json.find("\"gst\"").unwrap();
        let product_name = json.find("\"productName\"").unwrap();
        let sku = json.find("\"sku\"").unwrap();
        // Sorted by control name, not by position in the form.
        assert!(gst < product_name);
        assert!(product_name < sku);
    }
}
