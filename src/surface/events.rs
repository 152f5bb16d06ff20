use crate::surface::{BRAND_FILTER_ID, NAME_FILTER_ID, TYPE_FILTER_ID};
use std::str::FromStr;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Name,
    Brand,
    Type,
}

impl FilterField {
    pub fn element_id(self) -> &'static str {
        match self {
            FilterField::Name => NAME_FILTER_ID,
            FilterField::Brand => BRAND_FILTER_ID,
            FilterField::Type => TYPE_FILTER_ID,
        }
    }
}

/// The user typed into one of the filter inputs; `value` is the input's new content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEvent {
    pub field: FilterField,
    pub value: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventParseError {
    #[error("unknown filter '{0}', expected name, brand or type")]
    UnknownField(String),
}

/// Parses `name <text>`, `brand <text>` or `type <text>`. A bare field name clears it.
/// Everything after the single space following the field name is kept as typed.
impl FromStr for FilterEvent {
    type Err = EventParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (field, value) = line.split_once(' ').unwrap_or((line, ""));
        let field = match field.to_lowercase().as_str() {
            "name" => FilterField::Name,
            "brand" => FilterField::Brand,
            "type" => FilterField::Type,
            _ => return Err(EventParseError::UnknownField(field.to_string())),
        };
        Ok(FilterEvent { field, value: value.to_string() })
    }
}

/// Reads filter commands line by line and forwards them until the input ends
/// or the receiver goes away. Unparseable lines are logged and skipped.
pub async fn forward_events<R>(reader: R, tx: mpsc::Sender<FilterEvent>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("Input read error: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<FilterEvent>() {
            Ok(event) => {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
            Err(e) => warn!("{}", e),
        }
    }
    info!("Input closed.");
}

pub fn spawn_stdin_listener(tx: mpsc::Sender<FilterEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        forward_events(BufReader::new(tokio::io::stdin()), tx).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_and_value() {
        let event: FilterEvent = "name Lip Tint".parse().unwrap();
        assert_eq!(event, FilterEvent { field: FilterField::Name, value: "Lip Tint".into() });

        let event: FilterEvent = "  TYPE lipstick".parse().unwrap();
        assert_eq!(event.field, FilterField::Type);
        assert_eq!(event.value, "lipstick");
    }

    #[test]
    fn value_whitespace_is_kept_as_typed() {
        let event: FilterEvent = "name lip ".parse().unwrap();
        assert_eq!(event.value, "lip ");

        let event: FilterEvent = "brand  max factor\r\n".parse().unwrap();
        assert_eq!(event.value, " max factor");
    }

    #[test]
    fn bare_field_clears_it() {
        let event: FilterEvent = "brand".parse().unwrap();
        assert_eq!(event, FilterEvent { field: FilterField::Brand, value: String::new() });
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert_eq!(
            "price 5".parse::<FilterEvent>(),
            Err(EventParseError::UnknownField("price".into()))
        );
    }

    #[test]
    fn fields_map_to_element_ids() {
        assert_eq!(FilterField::Name.element_id(), "name-filter");
        assert_eq!(FilterField::Brand.element_id(), "brand-filter");
        assert_eq!(FilterField::Type.element_id(), "type-filter");
    }

    #[tokio::test]
    async fn forwards_valid_lines_in_order() {
        let input: &[u8] = b"name lip\nbogus line\n\nbrand nyx\ntype\n";
        let (tx, mut rx) = mpsc::channel(8);

        forward_events(input, tx).await;

        let mut received = Vec::new();
        while let Some(event) = rx.recv().await {
            received.push(event);
        }
        assert_eq!(
            received,
            vec![
                FilterEvent { field: FilterField::Name, value: "lip".into() },
                FilterEvent { field: FilterField::Brand, value: "nyx".into() },
                FilterEvent { field: FilterField::Type, value: String::new() },
            ]
        );
    }
}
