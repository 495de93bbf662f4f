//! Positional argument parsing
//!
//! Turns `key=value` tokens and the `model` keyword of the device
//! commands into [`QuorumCommand`]s.

use corosync_application::QuorumCommand;
use std::collections::BTreeMap;
use thiserror::Error;

const MODEL_KEYWORD: &str = "model";

/// Errors in positional command arguments
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing value of '{0}' option")]
    MissingValue(String),

    #[error("missing key in '{0}' option")]
    MissingKey(String),

    #[error("duplicate option '{key}' with different values '{first}' and '{second}'")]
    DuplicateOption {
        key: String,
        first: String,
        second: String,
    },

    #[error("'model' keyword must be followed by a model name")]
    MissingModel,

    #[error("nothing to update, specify options to change")]
    NothingToUpdate,
}

/// Parse `key=value` tokens; `key=` means "remove the option".
pub fn parse_options<S: AsRef<str>>(tokens: &[S]) -> Result<BTreeMap<String, String>, ArgsError> {
    let mut options: BTreeMap<String, String> = BTreeMap::new();
    for token in tokens {
        let token = token.as_ref();
        let Some((key, value)) = token.split_once('=') else {
            return Err(ArgsError::MissingValue(token.to_string()));
        };
        if key.is_empty() {
            return Err(ArgsError::MissingKey(token.to_string()));
        }
        if let Some(first) = options.get(key)
            && first != value
        {
            return Err(ArgsError::DuplicateOption {
                key: key.to_string(),
                first: first.clone(),
                second: value.to_string(),
            });
        }
        options.insert(key.to_string(), value.to_string());
    }
    Ok(options)
}

/// Split tokens at the first `model` keyword.
fn split_at_model<S: AsRef<str>>(tokens: &[S]) -> (&[S], Option<&[S]>) {
    match tokens.iter().position(|t| t.as_ref() == MODEL_KEYWORD) {
        Some(index) => (&tokens[..index], Some(&tokens[index + 1..])),
        None => (tokens, None),
    }
}

pub fn quorum_update_command<S: AsRef<str>>(
    tokens: &[S],
    force: bool,
) -> Result<QuorumCommand, ArgsError> {
    Ok(QuorumCommand::SetQuorumOptions {
        options: parse_options(tokens)?,
        force,
    })
}

/// `[generic k=v...] model <model> [model k=v...]`
pub fn device_add_command<S: AsRef<str>>(
    tokens: &[S],
    force: bool,
    force_model: bool,
) -> Result<QuorumCommand, ArgsError> {
    let (generic, rest) = split_at_model(tokens);
    let Some((model, model_tokens)) = rest.and_then(|rest| rest.split_first()) else {
        return Err(ArgsError::MissingModel);
    };
    let model = model.as_ref();
    if model.contains('=') {
        return Err(ArgsError::MissingModel);
    }

    Ok(QuorumCommand::AddDevice {
        model: model.to_string(),
        model_options: parse_options(model_tokens)?,
        generic_options: parse_options(generic)?,
        force_model,
        force_options: force,
    })
}

/// `[generic k=v...] [model <model k=v>...]`
pub fn device_update_command<S: AsRef<str>>(
    tokens: &[S],
    force: bool,
) -> Result<QuorumCommand, ArgsError> {
    let (generic, model_tokens) = split_at_model(tokens);
    let generic_options = parse_options(generic)?;
    let model_options = parse_options(model_tokens.unwrap_or_default())?;
    if generic_options.is_empty() && model_options.is_empty() {
        return Err(ArgsError::NothingToUpdate);
    }

    Ok(QuorumCommand::UpdateDevice {
        model_options,
        generic_options,
        force_options: force,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_options() {
        let options = parse_options(&["wait_for_all=1", "auto_tie_breaker=", "a=b=c"]).unwrap();
        assert_eq!(
            options,
            map(&[("wait_for_all", "1"), ("auto_tie_breaker", ""), ("a", "b=c")])
        );
    }

    #[test]
    fn test_parse_options_errors() {
        assert_eq!(
            parse_options(&["wait_for_all"]),
            Err(ArgsError::MissingValue("wait_for_all".to_string()))
        );
        assert_eq!(
            parse_options(&["=1"]),
            Err(ArgsError::MissingKey("=1".to_string()))
        );
        assert!(matches!(
            parse_options(&["a=1", "a=2"]),
            Err(ArgsError::DuplicateOption { .. })
        ));
        assert_eq!(parse_options(&["a=1", "a=1"]).unwrap(), map(&[("a", "1")]));
    }

    #[test]
    fn test_device_add_command() {
        let command =
            device_add_command(&["timeout=5000", "model", "net", "host=q", "port=4433"], true, false)
                .unwrap();
        assert_eq!(
            command,
            QuorumCommand::AddDevice {
                model: "net".to_string(),
                model_options: map(&[("host", "q"), ("port", "4433")]),
                generic_options: map(&[("timeout", "5000")]),
                force_model: false,
                force_options: true,
            }
        );
    }

    #[test]
    fn test_device_add_requires_model_name() {
        assert_eq!(
            device_add_command(&["timeout=5000"], false, false),
            Err(ArgsError::MissingModel)
        );
        assert_eq!(
            device_add_command(&["model"], false, false),
            Err(ArgsError::MissingModel)
        );
        assert_eq!(
            device_add_command(&["model", "host=q"], false, false),
            Err(ArgsError::MissingModel)
        );
    }

    #[test]
    fn test_device_update_command() {
        let command = device_update_command(&["sync_timeout=", "model", "host=b"], false).unwrap();
        assert_eq!(
            command,
            QuorumCommand::UpdateDevice {
                model_options: map(&[("host", "b")]),
                generic_options: map(&[("sync_timeout", "")]),
                force_options: false,
            }
        );

        let command = device_update_command(&["timeout=100"], true).unwrap();
        assert!(matches!(
            command,
            QuorumCommand::UpdateDevice { ref model_options, .. } if model_options.is_empty()
        ));
    }

    #[test]
    fn test_device_update_needs_something_to_do() {
        assert_eq!(
            device_update_command(&["model"], false),
            Err(ArgsError::NothingToUpdate)
        );
    }
}
