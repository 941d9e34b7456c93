//! Rackspace CloudFiles operations.
//!
//! CloudFiles answers failures with a bare status and a plain text body.

use cloudreq_core::{
    Classifier, ErrorFormat, Fallback, OperationSpec, OperationTable, OutcomeKind,
};

/// `GET /`
pub const LIST_CONTAINERS: &str = "list_containers";
/// `PUT /container`
pub const PUT_CONTAINER: &str = "put_container";
/// `DELETE /container`, `true` if the container is gone already.
pub const DELETE_CONTAINER_IF_EMPTY: &str = "delete_container_if_empty";
/// `HEAD /container/object`
pub const HEAD_OBJECT: &str = "head_object";
/// `GET /container/object`
pub const GET_OBJECT: &str = "get_object";
/// `POST /container/object`, `false` if the object is missing.
pub const SET_OBJECT_METADATA: &str = "set_object_metadata";

/// Build the CloudFiles operation table.
pub fn table() -> OperationTable {
    OperationTable::new(Classifier::default(), ErrorFormat::PlainText)
        .with_operation(
            OperationSpec::new(LIST_CONTAINERS).on(OutcomeKind::NotFound, Fallback::Empty),
        )
        .with_operation(OperationSpec::new(PUT_CONTAINER))
        .with_operation(
            OperationSpec::new(DELETE_CONTAINER_IF_EMPTY).on(OutcomeKind::NotFound, Fallback::True),
        )
        .with_operation(OperationSpec::new(HEAD_OBJECT).on(OutcomeKind::NotFound, Fallback::Null))
        .with_operation(OperationSpec::new(GET_OBJECT).on(OutcomeKind::NotFound, Fallback::Null))
        .with_operation(
            OperationSpec::new(SET_OBJECT_METADATA).on(OutcomeKind::NotFound, Fallback::False),
        )
}
