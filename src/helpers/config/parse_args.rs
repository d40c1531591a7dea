use super::*;

/// "--max-game-seconds" -> "max_game_seconds"
fn transform_arg_name(arg_name: &str) -> String {
    arg_name.trim_start_matches('-').replace('-', "_")
}

fn try_set(
    builder: &mut ConfigBuilder,
    arg_name: &str,
    value_str: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let name = transform_arg_name(arg_name);
    let source = format!("{} command line argument", arg_name);
    let mut setter = match builder.entry(&name) {
        Some(setter) => setter,
        None => return Err(format!("{} is not a valid command line option", arg_name).into()),
    };
    match (&mut setter, value_str) {
        (ConfigEntrySetter::Bool(set), None) => return set(true, source),
        (ConfigEntrySetter::Bool(set), Some("true")) => return set(true, source),
        (ConfigEntrySetter::Bool(set), Some("false")) => return set(false, source),
        (ConfigEntrySetter::String(set), Some(value_str)) => {
            return set(value_str.to_owned(), source)
        }
        (ConfigEntrySetter::Float(set), Some(value_str)) => {
            if let Ok(f) = value_str.parse::<f64>() {
                return set(f, source);
            }
        }
        _ => (),
    }
    match value_str {
        Some(value_str) => Err(format!(
            "{} is not valid for {} (expected: {})",
            value_str, arg_name, setter
        )
        .into()),
        None => Err(format!("{} argument is required for {}", setter, arg_name).into()),
    }
}

struct Arg {
    index: usize,
    name: String,
    values: Vec<String>,
}

/// Groups the raw arguments into options and the values that follow them. The first argument is
/// the program name and is skipped.
fn parse_list(args: &[String]) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut parsed: Vec<Arg> = Vec::new();
    for (i, arg) in args.iter().enumerate().skip(1) {
        if arg.starts_with('-') && arg.parse::<f64>().is_err() {
            parsed.push(Arg {
                index: i,
                name: arg.to_owned(),
                values: Vec::new(),
            });
        } else if let Some(last) = parsed.last_mut() {
            last.values.push(arg.to_owned());
        } else {
            return Err(format!(
                "command line argument {} is a value not an --option-name",
                arg
            )
            .into());
        }
    }
    Ok(parsed)
}

pub fn parse_args(builder: &mut ConfigBuilder, args: Vec<String>) -> Result<(), Box<dyn Error>> {
    for arg in parse_list(&args)? {
        match arg.values.as_slice() {
            [] => try_set(builder, &arg.name, None)?,
            [value] => try_set(builder, &arg.name, Some(value.as_str()))?,
            values => {
                return Err(format!(
                    "command line argument {} ({}) has multiple values: {}",
                    arg.index,
                    arg.name,
                    values.join(" ")
                )
                .into())
            }
        }
    }
    Ok(())
}
