//! Conversions between the wire shape (`todo_core::Todo`) and the persisted
//! shape (`TodoDocument`).
//!
//! Everything here is pure. Identifiers and creation timestamps are assigned
//! on the write path and never taken from the client.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime as BsonDateTime;
use todo_core::{CreateTodo, InvalidTodoId, Todo, TodoId, UpdateTodo};
use tracing::warn;

use crate::store::{TodoChanges, TodoDocument};

/// Fresh document for a create request, stamped with `now`.
pub fn new_document(input: CreateTodo, now: DateTime<Utc>) -> TodoDocument {
    TodoDocument {
        id: ObjectId::new(),
        title: input.title,
        completed: input.completed,
        created_at: BsonDateTime::from_millis(now.timestamp_millis()),
    }
}

pub fn changes(input: UpdateTodo) -> TodoChanges {
    TodoChanges {
        title: input.title,
        completed: input.completed,
    }
}

/// A stored `createAt` outside chrono's range is rendered as the epoch and
/// logged.
pub fn to_wire(document: TodoDocument) -> Todo {
    let millis = document.created_at.timestamp_millis();
    let created_at = DateTime::from_timestamp_millis(millis).unwrap_or_else(|| {
        warn!(todo_id = %document.id, millis, "stored createAt out of range, using epoch");
        DateTime::default()
    });
    Todo {
        id: wire_id(document.id),
        title: document.title,
        completed: document.completed,
        created_at,
    }
}

pub fn wire_id(id: ObjectId) -> TodoId {
    TodoId::from_bytes(id.bytes())
}

/// Parse a path segment into a native id. Only 24 hex characters pass.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, InvalidTodoId> {
    let id = TodoId::parse(raw)?;
    ObjectId::parse_str(id.as_str()).map_err(|_| InvalidTodoId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_assigns_id_and_timestamp() {
        let now = DateTime::parse_from_rfc3339("2024-05-01T12:00:00.123Z")
            .unwrap()
            .with_timezone(&Utc);
        let input = CreateTodo {
            title: "buy milk".to_string(),
            completed: true,
        };

        let first = new_document(input.clone(), now);
        let second = new_document(input, now);

        assert_ne!(first.id, second.id);
        assert_eq!(first.title, "buy milk");
        assert!(first.completed);
        assert_eq!(first.created_at.timestamp_millis(), now.timestamp_millis());
    }

    #[test]
    fn to_wire_renders_lowercase_hex_id() {
        let id = ObjectId::parse_str("65F0C0FFEE0000000000ABCD").unwrap();
        let todo = to_wire(TodoDocument {
            id,
            title: "t".to_string(),
            completed: false,
            created_at: BsonDateTime::from_millis(1_714_564_800_000),
        });
        assert_eq!(todo.id.as_str(), "65f0c0ffee0000000000abcd");
        assert_eq!(todo.id.as_str(), id.to_hex());
        assert_eq!(todo.created_at.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn to_wire_falls_back_to_epoch_for_out_of_range_timestamp() {
        let todo = to_wire(TodoDocument {
            id: ObjectId::new(),
            title: "corrupt".to_string(),
            completed: false,
            created_at: BsonDateTime::MAX,
        });
        assert_eq!(todo.created_at.timestamp_millis(), 0);
        assert_eq!(todo.title, "corrupt");
    }

    #[test]
    fn wire_id_round_trips_through_parse() {
        let id = ObjectId::new();
        let parsed = parse_object_id(wire_id(id).as_str()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_object_id_trims_whitespace() {
        let id = parse_object_id(" 65f0c0ffee0000000000abcd ").unwrap();
        assert_eq!(id.to_hex(), "65f0c0ffee0000000000abcd");
    }

    #[test]
    fn parse_object_id_rejects_malformed() {
        for raw in ["", "123", "65f0c0ffee0000000000abcg", "65f0c0ffee0000000000abcd00"] {
            assert!(parse_object_id(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn changes_carry_title_and_completed() {
        let changes = changes(UpdateTodo {
            title: "x".to_string(),
            completed: true,
        });
        assert_eq!(
            changes,
            TodoChanges {
                title: "x".to_string(),
                completed: true
            }
        );
    }
}
