use super::*;

pub const DEFAULT_TOML_PATH: &str = "lagrange.toml";

fn try_set(
    builder: &mut ConfigBuilder,
    file: &str,
    name: &str,
    value: toml::Value,
) -> Result<(), Box<dyn Error>> {
    let mut setter = match builder.entry(name) {
        Some(setter) => setter,
        None => return Err(format!("{} is not a valid option", name).into()),
    };
    let source = format!("{} in {}", name, file);
    match (&mut setter, &value) {
        (ConfigEntrySetter::Bool(set), toml::Value::Boolean(v)) => return set(*v, source),
        (ConfigEntrySetter::String(set), toml::Value::String(v)) => {
            return set(v.clone(), source)
        }
        (ConfigEntrySetter::Float(set), toml::Value::Float(v)) => return set(*v, source),
        (ConfigEntrySetter::Float(set), toml::Value::Integer(v)) => {
            return set(*v as f64, source)
        }
        _ => (),
    }
    Err(format!("{} is not valid for {} (expected: {})", value, name, setter).into())
}

/// Feeds every top-level key of a TOML file into the builder
pub fn load_toml(
    path: &str,
    builder: &mut ConfigBuilder,
    fs: &Filesystem,
) -> Result<(), Box<dyn Error>> {
    let contents = fs.read_to_string(path)?;
    let parsed = contents
        .parse::<toml::Value>()
        .map_err(|e| format!("{}: {}", path, e))?;
    match parsed {
        toml::Value::Table(table) => {
            for (name, value) in table {
                try_set(builder, path, &name, value).map_err(|e| format!("{}: {}", path, e))?;
            }
            Ok(())
        }
        _ => Err(format!("toplevel value of {} is not a table", path).into()),
    }
}
