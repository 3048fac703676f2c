//! Document providers and explicit provider resolution.
//!
//! A [`DocumentProvider`] is the narrow boundary between the value model and
//! whatever turns text into values and back. Callers never name a provider
//! type directly. They resolve one from a [`Registry`] at the program entry
//! point and pass the resulting [`Json`] handle to the code that needs it:
//!
//! ```rust
//! use jsondoc::provider::{Json, Registry};
//!
//! fn build(json: &Json) -> String {
//!     let doc = json.new_object_with(2, |obj| {
//!         obj.set("id", json.new_integer(7))
//!             .set_if_with(true, "tags", || json.new_array_with(1, |arr| {
//!                 arr.add("new");
//!             }));
//!     });
//!     json.to_text(&doc.into())
//! }
//!
//! let json = Registry::with_defaults().resolve().unwrap();
//! assert_eq!(build(&json), r#"{"id":7,"tags":["new"]}"#);
//! ```
//!
//! ## Resolution
//!
//! Providers are registered explicitly and in order. [`Registry::resolve`]
//! returns the first one registered. [`Registry::resolve_with`] honours the
//! preferred name in a [`ProviderConfig`]. Both fail with
//! [`Error::ProviderUnavailable`] when nothing matches.

use crate::de::{parse_slice, parse_str};
use crate::{Array, Decimal, Error, JsonOptions, Object, Result, Value};
use num_bigint::BigInt;
use std::fmt;
use std::io::Read;
use std::sync::Arc;

/// Constructs, parses and renders documents.
///
/// The factory methods have default implementations in terms of the plain
/// value conversions, so a provider only has to supply its name and the text
/// boundary.
pub trait DocumentProvider: Send + Sync {
    /// Name used for [`ProviderConfig`] selection.
    fn name(&self) -> &str;

    fn new_array(&self, size_hint: usize) -> Array {
        Array::with_capacity(size_hint)
    }

    fn new_object(&self, size_hint: usize) -> Object {
        Object::with_capacity(size_hint)
    }

    fn new_boolean(&self, value: bool) -> Value {
        Value::Boolean(value)
    }

    fn new_integer(&self, value: BigInt) -> Value {
        Value::Integer(value)
    }

    fn new_decimal(&self, value: Decimal) -> Value {
        Value::Decimal(value)
    }

    fn new_string(&self, value: String) -> Value {
        Value::String(value)
    }

    fn new_null(&self) -> Value {
        Value::Null
    }

    /// Parses one document from text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] for input that is not a single JSON
    /// document.
    fn deserialize_str(&self, input: &str) -> Result<Value>;

    /// Parses one document from UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] for invalid UTF-8 or invalid JSON.
    fn deserialize_slice(&self, input: &[u8]) -> Result<Value> {
        let text = std::str::from_utf8(input)
            .map_err(|e| Error::malformed(1, 1, e.valid_up_to(), "invalid UTF-8"))?;
        self.deserialize_str(text)
    }

    fn to_text(&self, value: &Value) -> String;

    fn to_pretty_text(&self, value: &Value) -> String;
}

/// The built-in provider: a strict JSON parser and the crate serializer.
#[derive(Clone, Debug, Default)]
pub struct TextProvider {
    options: JsonOptions,
}

impl TextProvider {
    pub const NAME: &'static str = "text";

    #[must_use]
    pub fn new(options: JsonOptions) -> Self {
        TextProvider { options }
    }

    #[must_use]
    pub fn options(&self) -> &JsonOptions {
        &self.options
    }
}

impl DocumentProvider for TextProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn deserialize_str(&self, input: &str) -> Result<Value> {
        parse_str(input, &self.options)
    }

    fn deserialize_slice(&self, input: &[u8]) -> Result<Value> {
        parse_slice(input, &self.options)
    }

    fn to_text(&self, value: &Value) -> String {
        let options = JsonOptions {
            pretty: false,
            ..self.options.clone()
        };
        crate::ser::to_string_with_options(value, &options)
    }

    fn to_pretty_text(&self, value: &Value) -> String {
        let options = JsonOptions {
            pretty: true,
            ..self.options.clone()
        };
        crate::ser::to_string_with_options(value, &options)
    }
}

/// Selection settings for [`Registry::resolve_with`].
///
/// # Examples
///
/// ```rust
/// use jsondoc::provider::{ProviderConfig, Registry};
///
/// let registry = Registry::with_defaults();
/// let json = registry
///     .resolve_with(&ProviderConfig::new().with_preferred("text"))
///     .unwrap();
/// assert_eq!(json.name(), "text");
///
/// let missing = registry.resolve_with(&ProviderConfig::new().with_preferred("simd"));
/// assert!(missing.is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    pub preferred: Option<String>,
}

impl ProviderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the provider registered under `name`.
    #[must_use]
    pub fn with_preferred(mut self, name: impl Into<String>) -> Self {
        self.preferred = Some(name.into());
        self
    }
}

/// An ordered set of providers to resolve a [`Json`] handle from.
#[derive(Clone, Default)]
pub struct Registry {
    providers: Vec<Arc<dyn DocumentProvider>>,
}

impl Registry {
    /// Creates an empty registry. Resolving from it fails until a provider is
    /// registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the [`TextProvider`] with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Registry::new();
        registry.register(TextProvider::default());
        registry
    }

    /// Adds `provider` after every provider already registered.
    pub fn register<P: DocumentProvider + 'static>(&mut self, provider: P) -> &mut Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Names of the registered providers, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.providers.iter().map(|p| p.name())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns a handle on the first registered provider.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProviderUnavailable`] when the registry is empty.
    pub fn resolve(&self) -> Result<Json> {
        self.providers
            .first()
            .map(|p| Json::from_arc(Arc::clone(p)))
            .ok_or_else(|| Error::provider_unavailable("no providers registered"))
    }

    /// Returns a handle on the preferred provider, or the first registered
    /// one when `config` names none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProviderUnavailable`] when the preferred name is not
    /// registered or the registry is empty.
    pub fn resolve_with(&self, config: &ProviderConfig) -> Result<Json> {
        let name = match &config.preferred {
            Some(name) => name,
            None => return self.resolve(),
        };
        self.providers
            .iter()
            .find(|p| p.name() == name.as_str())
            .map(|p| Json::from_arc(Arc::clone(p)))
            .ok_or_else(|| {
                let available: Vec<&str> = self.names().collect();
                Error::provider_unavailable(&format!(
                    "no provider named '{}' (registered: [{}])",
                    name,
                    available.join(", ")
                ))
            })
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// A cheap, cloneable handle on a resolved provider.
///
/// Adds generic conveniences on top of the object-safe
/// [`DocumentProvider`] methods.
#[derive(Clone)]
pub struct Json {
    provider: Arc<dyn DocumentProvider>,
}

impl Json {
    /// Wraps a provider directly, bypassing a registry.
    pub fn new<P: DocumentProvider + 'static>(provider: P) -> Self {
        Json::from_arc(Arc::new(provider))
    }

    pub fn from_arc(provider: Arc<dyn DocumentProvider>) -> Self {
        Json { provider }
    }

    pub fn name(&self) -> &str {
        self.provider.name()
    }

    pub fn provider(&self) -> &dyn DocumentProvider {
        self.provider.as_ref()
    }

    pub fn new_array(&self, size_hint: usize) -> Array {
        self.provider.new_array(size_hint)
    }

    /// Creates an array and fills it in `block`.
    pub fn new_array_with<F: FnOnce(&mut Array)>(&self, size_hint: usize, block: F) -> Array {
        let mut arr = self.new_array(size_hint);
        block(&mut arr);
        arr
    }

    pub fn new_object(&self, size_hint: usize) -> Object {
        self.provider.new_object(size_hint)
    }

    /// Creates an object and fills it in `block`.
    pub fn new_object_with<F: FnOnce(&mut Object)>(&self, size_hint: usize, block: F) -> Object {
        let mut obj = self.new_object(size_hint);
        block(&mut obj);
        obj
    }

    pub fn new_boolean(&self, value: bool) -> Value {
        self.provider.new_boolean(value)
    }

    pub fn new_integer<T: Into<BigInt>>(&self, value: T) -> Value {
        self.provider.new_integer(value.into())
    }

    /// Creates a decimal from anything convertible to [`Decimal`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteNumber`] for NaN and infinite floats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::provider::Registry;
    /// use jsondoc::Decimal;
    ///
    /// let json = Registry::with_defaults().resolve().unwrap();
    /// assert_eq!(json.new_decimal(0.5).unwrap().to_json_string(), "0.5");
    /// assert_eq!(json.new_decimal(Decimal::from(2)).unwrap().to_json_string(), "2.0");
    /// assert!(json.new_decimal(f64::NAN).is_err());
    /// ```
    pub fn new_decimal<D>(&self, value: D) -> Result<Value>
    where
        D: TryInto<Decimal>,
        Error: From<D::Error>,
    {
        Ok(self.provider.new_decimal(value.try_into()?))
    }

    pub fn new_string(&self, value: impl Into<String>) -> Value {
        self.provider.new_string(value.into())
    }

    pub fn new_null(&self) -> Value {
        self.provider.new_null()
    }

    /// Creates a string value holding `bytes` as lower-case hex.
    pub fn new_binary(&self, bytes: &[u8]) -> Value {
        self.provider.new_string(hex::encode(bytes))
    }

    pub fn deserialize(&self, input: &str) -> Result<Value> {
        self.provider.deserialize_str(input)
    }

    pub fn deserialize_slice(&self, input: &[u8]) -> Result<Value> {
        self.provider.deserialize_slice(input)
    }

    /// Reads `reader` to the end, then parses the bytes as one document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when reading fails and [`Error::Malformed`] for
    /// invalid input.
    pub fn deserialize_reader<R: Read>(&self, mut reader: R) -> Result<Value> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        self.deserialize_slice(&buf)
    }

    pub fn to_text(&self, value: &Value) -> String {
        self.provider.to_text(value)
    }

    pub fn to_pretty_text(&self, value: &Value) -> String {
        self.provider.to_pretty_text(value)
    }
}

impl fmt::Debug for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Json")
            .field("provider", &self.provider.name())
            .finish()
    }
}
