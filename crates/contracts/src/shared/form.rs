//! Declarative form schema, typed coercion and validation.
//!
//! Inputs are kept as strings while the user edits. A schema describes every
//! field once; `validate` checks the strings against it and `FormReader`
//! turns them into typed values with one consistent policy:
//!
//! - a blank optional field is `None`, a blank required field is an error;
//! - `"0"` is a value, never "empty";
//! - decimals accept both `.` and `,` as separator.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::resource::Resource;

pub const MSG_REQUIRED: &str = "Este campo es obligatorio";
pub const MSG_INTEGER: &str = "Debe ser un número entero";
pub const MSG_NUMBER: &str = "Debe ser un número válido";
pub const MSG_EMAIL: &str = "Correo electrónico inválido";
pub const MSG_DATE: &str = "Fecha inválida (AAAA-MM-DD)";
pub const MSG_OPTION: &str = "Seleccione una opción válida";

// ============================================================================
// Field errors
// ============================================================================

/// Field name → first error message for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first message for a field wins.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.0.entry(field).or_insert(message);
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        f.write_str(&parts.join("; "))
    }
}

// ============================================================================
// Enums shown as selects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A closed set of values with a wire code and a display label.
pub trait FormEnum: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn code(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.code() == code)
    }

    fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|v| SelectOption::new(v.code(), v.label()))
            .collect()
    }
}

/// Declares a serde enum whose wire codes double as select values.
///
/// ```ignore
/// form_enum! {
///     pub enum Rol {
///         Admin => ("ADMIN", "Administrador"),
///         User => ("USER", "Usuario"),
///     }
/// }
/// ```
#[macro_export]
macro_rules! form_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $(#[serde(rename = $code)] $variant),+
        }

        impl $crate::shared::form::FormEnum for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

// ============================================================================
// Schema
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    TextArea,
    Integer,
    Decimal,
    Bool,
    Date,
    Select(Vec<SelectOption>),
    /// Foreign key to another resource; the value is its id. Options are
    /// supplied at render time from that resource's list.
    Reference(&'static str),
}

impl FieldKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Integer | FieldKind::Decimal | FieldKind::Reference(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Inclusive lower bound for numbers.
    pub min: Option<f64>,
    /// Exclusive lower bound for numbers.
    pub greater_than: Option<f64>,
    pub max: Option<f64>,
    pub min_len: Option<usize>,
    pub placeholder: &'static str,
    pub default: &'static str,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            min: None,
            greater_than: None,
            max: None,
            min_len: None,
            placeholder: "",
            default: "",
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn password(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    pub fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::TextArea)
    }

    pub fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Integer)
    }

    pub fn decimal(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Decimal)
    }

    pub fn boolean(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Bool)
    }

    pub fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn select<E: FormEnum>(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Select(E::options()))
    }

    pub fn reference(name: &'static str, label: &'static str, resource: &'static str) -> Self {
        Self::new(name, label, FieldKind::Reference(resource))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min(mut self, value: f64) -> Self {
        self.min = Some(value);
        self
    }

    pub fn greater_than(mut self, value: f64) -> Self {
        self.greater_than = Some(value);
        self
    }

    pub fn max(mut self, value: f64) -> Self {
        self.max = Some(value);
        self
    }

    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    pub fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = text;
        self
    }

    pub fn default_value(mut self, value: &'static str) -> Self {
        self.default = value;
        self
    }
}

// ============================================================================
// Values
// ============================================================================

/// Raw string state of a form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values initialised from each field's default.
    pub fn from_schema(schema: &[FieldSpec]) -> Self {
        let mut values = Self::new();
        for field in schema {
            values.set(field.name, field.default);
        }
        values
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn with(mut self, name: &str, value: impl ToString) -> Self {
        self.set(name, value.to_string());
        self
    }

    pub fn with_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self.with(name, ""),
        }
    }

    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).trim().is_empty()
    }
}

// ============================================================================
// Coercion
// ============================================================================

pub fn parse_integer(raw: &str) -> Result<Option<i64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>().map(Some).map_err(|_| MSG_INTEGER.to_string())
}

pub fn parse_decimal(raw: &str) -> Result<Option<f64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(MSG_NUMBER.to_string()),
    }
}

pub fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "true" | "1" | "on" | "si" | "sí"
    )
}

pub fn parse_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    // Accept full ISO datetimes coming back from the API.
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| MSG_DATE.to_string())
}

pub fn is_valid_email(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false)
}

fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn check_bounds(field: &FieldSpec, value: f64) -> Option<String> {
    if let Some(gt) = field.greater_than {
        if value <= gt {
            return Some(format!("Debe ser mayor que {}", format_bound(gt)));
        }
    }
    if let Some(min) = field.min {
        if value < min {
            return Some(format!("Debe ser mayor o igual a {}", format_bound(min)));
        }
    }
    if let Some(max) = field.max {
        if value > max {
            return Some(format!("Debe ser menor o igual a {}", format_bound(max)));
        }
    }
    None
}

/// Check `values` against `schema`.
pub fn validate(schema: &[FieldSpec], values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in schema {
        let raw = values.get(field.name).trim();
        if raw.is_empty() {
            if field.required && field.kind != FieldKind::Bool {
                errors.insert(field.name, MSG_REQUIRED);
            }
            continue;
        }

        let problem = match &field.kind {
            FieldKind::Text | FieldKind::TextArea | FieldKind::Password => field
                .min_len
                .filter(|min| raw.chars().count() < *min)
                .map(|min| format!("Debe tener al menos {} caracteres", min)),
            FieldKind::Email => (!is_valid_email(raw)).then(|| MSG_EMAIL.to_string()),
            FieldKind::Integer => match parse_integer(raw) {
                Ok(Some(v)) => check_bounds(field, v as f64),
                Ok(None) => None,
                Err(e) => Some(e),
            },
            FieldKind::Decimal => match parse_decimal(raw) {
                Ok(Some(v)) => check_bounds(field, v),
                Ok(None) => None,
                Err(e) => Some(e),
            },
            FieldKind::Reference(_) => match parse_integer(raw) {
                Ok(Some(v)) if v > 0 => None,
                _ => Some(MSG_OPTION.to_string()),
            },
            FieldKind::Date => parse_date(raw).err(),
            FieldKind::Select(options) => (!options.iter().any(|o| o.value == raw))
                .then(|| MSG_OPTION.to_string()),
            FieldKind::Bool => None,
        };

        if let Some(message) = problem {
            errors.insert(field.name, message);
        }
    }

    errors
}

// ============================================================================
// Reader
// ============================================================================

/// Reads typed values out of a validated form, collecting errors as it goes.
///
/// Getters for required values return a neutral fallback on error; callers
/// build the DTO unconditionally and `finish` discards it if anything failed.
pub struct FormReader<'a> {
    values: &'a FormValues,
    errors: FieldErrors,
}

impl<'a> FormReader<'a> {
    pub fn new(schema: &[FieldSpec], values: &'a FormValues) -> Self {
        Self {
            values,
            errors: validate(schema, values),
        }
    }

    pub fn raw(&self, name: &str) -> &'a str {
        self.values.get(name)
    }

    pub fn error(&mut self, name: &str, message: impl Into<String>) {
        self.errors.insert(name, message);
    }

    pub fn has_error(&self, name: &str) -> bool {
        self.errors.contains(name)
    }

    pub fn text(&mut self, name: &str) -> String {
        let value = self.values.get(name).trim().to_string();
        if value.is_empty() {
            self.errors.insert(name, MSG_REQUIRED);
        }
        value
    }

    pub fn opt_text(&mut self, name: &str) -> Option<String> {
        let value = self.values.get(name).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn opt_int(&mut self, name: &str) -> Option<i64> {
        match parse_integer(self.values.get(name)) {
            Ok(v) => v,
            Err(e) => {
                self.errors.insert(name, e);
                None
            }
        }
    }

    pub fn int(&mut self, name: &str) -> i64 {
        let value = self.opt_int(name);
        if value.is_none() {
            self.errors.insert(name, MSG_REQUIRED);
        }
        value.unwrap_or_default()
    }

    pub fn opt_decimal(&mut self, name: &str) -> Option<f64> {
        match parse_decimal(self.values.get(name)) {
            Ok(v) => v,
            Err(e) => {
                self.errors.insert(name, e);
                None
            }
        }
    }

    pub fn decimal(&mut self, name: &str) -> f64 {
        let value = self.opt_decimal(name);
        if value.is_none() {
            self.errors.insert(name, MSG_REQUIRED);
        }
        value.unwrap_or_default()
    }

    pub fn boolean(&mut self, name: &str) -> bool {
        parse_bool(self.values.get(name))
    }

    pub fn opt_date(&mut self, name: &str) -> Option<NaiveDate> {
        match parse_date(self.values.get(name)) {
            Ok(v) => v,
            Err(e) => {
                self.errors.insert(name, e);
                None
            }
        }
    }

    pub fn date(&mut self, name: &str) -> NaiveDate {
        let value = self.opt_date(name);
        if value.is_none() {
            self.errors.insert(name, MSG_REQUIRED);
        }
        value.unwrap_or_default()
    }

    pub fn opt_choice<E: FormEnum>(&mut self, name: &str) -> Option<E> {
        let raw = self.values.get(name).trim();
        if raw.is_empty() {
            return None;
        }
        let value = E::from_code(raw);
        if value.is_none() {
            self.errors.insert(name, MSG_OPTION);
        }
        value
    }

    pub fn choice<E: FormEnum>(&mut self, name: &str) -> E {
        match self.opt_choice::<E>(name) {
            Some(v) => v,
            None => {
                self.errors.insert(name, MSG_REQUIRED);
                E::ALL[0]
            }
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn finish<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}

// ============================================================================
// Entity forms
// ============================================================================

/// Mapping between an entity and its string-valued form.
pub trait EntityForm: Resource {
    fn schema() -> Vec<FieldSpec>;

    fn blank() -> FormValues {
        FormValues::from_schema(&Self::schema())
    }

    fn from_entity(entity: &Self::Entity) -> FormValues;

    fn to_create(values: &FormValues) -> Result<Self::CreateDto, FieldErrors>;

    fn to_update(values: &FormValues) -> Result<Self::UpdateDto, FieldErrors>;
}

/// Round to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::form_enum! {
        enum Color {
            Rojo => ("ROJO", "Rojo"),
            Azul => ("AZUL", "Azul"),
        }
    }

    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("nombre", "Nombre").required(),
            FieldSpec::email("email", "Email"),
            FieldSpec::decimal("precio", "Precio").required().greater_than(0.0),
            FieldSpec::integer("stock", "Stock").required().min(0.0),
            FieldSpec::password("password", "Contraseña").min_len(6),
            FieldSpec::select::<Color>("color", "Color"),
            FieldSpec::boolean("activo", "Activo").required(),
        ]
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let errors = validate(&schema(), &FormValues::new());
        assert_eq!(errors.get("nombre"), Some(MSG_REQUIRED));
        assert_eq!(errors.get("precio"), Some(MSG_REQUIRED));
        assert_eq!(errors.get("stock"), Some(MSG_REQUIRED));
        assert!(!errors.contains("email"));
        assert!(!errors.contains("activo"));
    }

    #[test]
    fn zero_is_a_value_not_blank() {
        let values = FormValues::new()
            .with("nombre", "Polo")
            .with("precio", "0")
            .with("stock", "0");
        let errors = validate(&schema(), &values);
        assert_eq!(errors.get("precio"), Some("Debe ser mayor que 0"));
        assert!(!errors.contains("stock"));
    }

    #[test]
    fn numbers_emails_and_selects_are_checked() {
        let values = FormValues::new()
            .with("nombre", "Polo")
            .with("email", "ana@")
            .with("precio", "abc")
            .with("stock", "-1")
            .with("password", "123")
            .with("color", "VERDE");
        let errors = validate(&schema(), &values);
        assert_eq!(errors.get("email"), Some(MSG_EMAIL));
        assert_eq!(errors.get("precio"), Some(MSG_NUMBER));
        assert_eq!(errors.get("stock"), Some("Debe ser mayor o igual a 0"));
        assert_eq!(errors.get("password"), Some("Debe tener al menos 6 caracteres"));
        assert_eq!(errors.get("color"), Some(MSG_OPTION));
    }

    #[test]
    fn decimal_accepts_comma() {
        assert_eq!(parse_decimal("10,5"), Ok(Some(10.5)));
        assert_eq!(parse_decimal("  "), Ok(None));
        assert!(parse_decimal("NaN").is_err());
    }

    #[test]
    fn dates_accept_iso_datetimes() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_date("2024-03-15"), Ok(Some(d)));
        assert_eq!(parse_date("2024-03-15T10:00:00.000Z"), Ok(Some(d)));
        assert!(parse_date("15/03/2024").is_err());
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@c.com"));
    }

    #[test]
    fn reader_builds_typed_values() {
        let values = FormValues::new()
            .with("nombre", " Polo ")
            .with("precio", "25,90")
            .with("stock", "3")
            .with("color", "AZUL")
            .with("activo", "true");
        let schema = schema();
        let mut r = FormReader::new(&schema, &values);
        let nombre = r.text("nombre");
        let precio = r.decimal("precio");
        let stock = r.int("stock");
        let color: Color = r.choice("color");
        let email = r.opt_text("email");
        let activo = r.boolean("activo");
        let out = r.finish((nombre, precio, stock, color, email, activo)).unwrap();
        assert_eq!(out, ("Polo".to_string(), 25.9, 3, Color::Azul, None, true));
    }

    #[test]
    fn reader_fails_when_anything_is_wrong() {
        let values = FormValues::new().with("nombre", "Polo").with("precio", "1");
        let schema = schema();
        let mut r = FormReader::new(&schema, &values);
        let stock = r.int("stock");
        assert_eq!(stock, 0);
        let errors = r.finish(()).unwrap_err();
        assert_eq!(errors.get("stock"), Some(MSG_REQUIRED));
    }

    #[test]
    fn form_enum_round_trips_codes() {
        assert_eq!(Color::from_code("ROJO"), Some(Color::Rojo));
        assert_eq!(Color::Azul.label(), "Azul");
        assert_eq!(serde_json::to_string(&Color::Azul).unwrap(), "\"AZUL\"");
        assert_eq!(Color::options().len(), 2);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(2.5, 0), 3.0);
    }
}
