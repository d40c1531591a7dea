use super::*;

pub type ConfigEntrySetterFn<'a, T> = Box<dyn FnMut(T, String) -> Result<(), Box<dyn Error>> + 'a>;

/// Sets the value of one entry. The String argument describes where the value came from (a
/// file, a command line argument) so errors can point the user at it.
pub enum ConfigEntrySetter<'a> {
    Bool(ConfigEntrySetterFn<'a, bool>),
    String(ConfigEntrySetterFn<'a, String>),
    Float(ConfigEntrySetterFn<'a, f64>),
}

impl<'a> fmt::Display for ConfigEntrySetter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Bool(_) => "bool",
                Self::String(_) => "string",
                Self::Float(_) => "float",
            }
        )
    }
}

pub trait ConfigEntry {
    fn name(&self) -> &str;
    fn help(&self) -> &str;
    fn default_text(&self) -> String;
    fn setter(&mut self) -> ConfigEntrySetter<'_>;
    fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>>;
}

type ApplyFn<T> = Box<dyn Fn(&mut MasterConfig, T, Option<&str>) -> Result<(), Box<dyn Error>>>;

impl dyn ConfigEntry {
    pub fn new_bool<F>(name: &str, help: &str, default_value: bool, apply: F) -> Box<Self>
    where
        F: Fn(&mut MasterConfig, bool, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        ConfigEntryImpl::new(name, help, default_value, Box::new(apply))
    }

    pub fn new_string<F>(name: &str, help: &str, default_value: &str, apply: F) -> Box<Self>
    where
        F: Fn(&mut MasterConfig, String, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        ConfigEntryImpl::new(name, help, default_value.to_string(), Box::new(apply))
    }

    pub fn new_float<F>(name: &str, help: &str, default_value: f64, apply: F) -> Box<Self>
    where
        F: Fn(&mut MasterConfig, f64, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        ConfigEntryImpl::new(name, help, default_value, Box::new(apply))
    }

    /// A string entry restricted to the names of the given variants. The first variant is the
    /// default.
    pub fn new_enum(name: &str, help: &str, variants: Vec<ConfigEntryVariant>) -> Box<Self> {
        assert!(!variants.is_empty());
        let mut help = help.to_string();
        for variant in &variants {
            help.push_str(&format!("\n  {}: {}", variant.name, variant.help));
        }
        let default_value = variants[0].name.clone();
        ConfigEntryImpl::new(
            name,
            &help,
            default_value,
            Box::new(move |conf: &mut MasterConfig, value: String, source: Option<&str>| {
                match variants.iter().find(|v| v.name == value) {
                    Some(variant) => {
                        (variant.apply_fn)(conf);
                        Ok(())
                    }
                    None => Err(format!(
                        "{} has invalid value {}, valid options are {}",
                        source.unwrap_or("default"),
                        value,
                        variants
                            .iter()
                            .map(|v| v.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    )
                    .into()),
                }
            }),
        )
    }

    pub fn new_enum_variant<F: Fn(&mut MasterConfig) + 'static>(
        name: &str,
        help: &str,
        apply: F,
    ) -> ConfigEntryVariant {
        ConfigEntryVariant {
            name: name.to_string(),
            help: help.to_string(),
            apply_fn: Box::new(apply),
        }
    }
}

pub struct ConfigEntryVariant {
    pub name: String,
    pub help: String,
    pub apply_fn: Box<dyn Fn(&mut MasterConfig)>,
}

struct SetterTarget<T> {
    value: T,
    /// Some if the value is not default, describes how it was set
    source: Option<String>,
}

impl<T> SetterTarget<T> {
    fn set(&mut self, value: T, source: String) -> Result<(), Box<dyn Error>> {
        self.value = value;
        self.source = Some(source);
        Ok(())
    }
}

/// The value types an entry can hold, and how to build a setter for each
trait EntryValue: Clone + fmt::Display + Sized + 'static {
    fn setter(target: &mut SetterTarget<Self>) -> ConfigEntrySetter<'_>;
}

impl EntryValue for bool {
    fn setter(target: &mut SetterTarget<Self>) -> ConfigEntrySetter<'_> {
        ConfigEntrySetter::Bool(Box::new(move |value, source| target.set(value, source)))
    }
}

impl EntryValue for String {
    fn setter(target: &mut SetterTarget<Self>) -> ConfigEntrySetter<'_> {
        ConfigEntrySetter::String(Box::new(move |value, source| target.set(value, source)))
    }
}

impl EntryValue for f64 {
    fn setter(target: &mut SetterTarget<Self>) -> ConfigEntrySetter<'_> {
        ConfigEntrySetter::Float(Box::new(move |value, source| target.set(value, source)))
    }
}

struct ConfigEntryImpl<T> {
    name: String,
    help: String,
    default_value: T,
    target: SetterTarget<T>,
    apply_fn: ApplyFn<T>,
}

impl<T: EntryValue> ConfigEntryImpl<T> {
    fn new(name: &str, help: &str, default_value: T, apply_fn: ApplyFn<T>) -> Box<Self> {
        Box::new(Self {
            name: name.to_string(),
            help: help.to_string(),
            default_value: default_value.clone(),
            target: SetterTarget {
                value: default_value,
                source: None,
            },
            apply_fn,
        })
    }
}

impl<T: EntryValue> ConfigEntry for ConfigEntryImpl<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn help(&self) -> &str {
        &self.help
    }

    fn default_text(&self) -> String {
        self.default_value.to_string()
    }

    fn setter(&mut self) -> ConfigEntrySetter<'_> {
        T::setter(&mut self.target)
    }

    fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>> {
        (self.apply_fn)(
            target,
            self.target.value.clone(),
            self.target.source.as_deref(),
        )
    }
}

pub struct ConfigBuilder {
    entries: Vec<Box<dyn ConfigEntry>>,
}

impl ConfigBuilder {
    pub fn new(entries: Vec<Box<dyn ConfigEntry>>) -> Self {
        let mut names = HashSet::new();
        for entry in &entries {
            if !names.insert(entry.name().to_string()) {
                panic!("duplicate configuration entry {}", entry.name());
            }
        }
        Self { entries }
    }

    pub fn entry(&mut self, name: &str) -> Option<ConfigEntrySetter<'_>> {
        for entry in &mut self.entries {
            if entry.name() == name {
                return Some(entry.setter());
            }
        }
        None
    }

    /// Applies every entry in declaration order, stopping at the first error
    pub fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>> {
        for entry in &self.entries {
            entry
                .apply_to(target)
                .map_err(|e| format!("{} configuration option: {}", entry.name(), e))?;
        }
        Ok(())
    }

    pub fn help_text(&self) -> String {
        let mut text = format!(
            "Options may be given as --option-name value or in {}\n",
            DEFAULT_TOML_PATH
        );
        for entry in &self.entries {
            text.push_str(&format!(
                "\n--{} (default: {})\n",
                entry.name().replace('_', "-"),
                entry.default_text()
            ));
            for line in entry.help().lines() {
                text.push_str(&format!("    {}\n", line));
            }
        }
        text
    }
}
