use crate::error::VendingError;
use serde::Deserialize;

/// A discrete input event, consumed by exactly one `dispatch` call.
///
/// Events a state does not recognize are dropped, not queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CoinInserted(String),
    ProductSelected(String),
    ReturnRequested,
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Coin,
    Select,
    Return,
}

/// The raw CSV form of an event: `type,key`. Coin and select rows carry the
/// catalog key of the denomination or product; return rows leave it empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct EventRecord {
    pub r#type: EventType,
    pub key: Option<String>,
}

impl TryFrom<EventRecord> for Event {
    type Error = VendingError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        match record.r#type {
            EventType::Coin => {
                let key = record.key.filter(|k| !k.is_empty()).ok_or_else(|| {
                    VendingError::EventError("coin event missing key".to_string())
                })?;
                Ok(Event::CoinInserted(key))
            }
            EventType::Select => {
                let key = record.key.filter(|k| !k.is_empty()).ok_or_else(|| {
                    VendingError::EventError("select event missing key".to_string())
                })?;
                Ok(Event::ProductSelected(key))
            }
            EventType::Return => Ok(Event::ReturnRequested),
        }
    }
}
