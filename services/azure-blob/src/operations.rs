//! Operations exposed by the Azure Blob binding and how each treats failures.

use cloudreq_core::{
    Classifier, ErrorFormat, Fallback, OperationSpec, OperationTable, OutcomeKind,
};

/// `PUT ?restype=container`, returns `false` if the container exists.
pub const CREATE_CONTAINER: &str = "create_container";
/// `DELETE ?restype=container`, succeeds if the container is gone.
pub const DELETE_CONTAINER: &str = "delete_container";
/// `GET ?comp=list`
pub const LIST_CONTAINERS: &str = "list_containers";
/// `GET ?restype=container&comp=list`, empty if the container is gone.
pub const LIST_BLOBS: &str = "list_blobs";
/// `GET /container/blob`, `None` if missing.
pub const GET_BLOB: &str = "get_blob";
/// `HEAD /container/blob`, `None` if missing.
pub const GET_BLOB_PROPERTIES: &str = "get_blob_properties";
/// `PUT /container/blob`
pub const PUT_BLOB: &str = "put_blob";
/// `DELETE /container/blob`, succeeds if the blob is gone.
pub const DELETE_BLOB: &str = "delete_blob";

/// Build the Azure Blob operation table.
pub fn table() -> OperationTable {
    let classifier = Classifier::default()
        .with_retryable_code("ServerBusy")
        .with_retryable_code("OperationTimedOut")
        .with_not_found_code("ContainerNotFound")
        .with_not_found_code("BlobNotFound");

    OperationTable::new(classifier, ErrorFormat::AzureXml)
        .with_operation(
            OperationSpec::new(CREATE_CONTAINER)
                .exempt("ContainerAlreadyExists")
                .on(OutcomeKind::KnownBenignFailure, Fallback::False),
        )
        .with_operation(
            OperationSpec::new(DELETE_CONTAINER).on(OutcomeKind::NotFound, Fallback::Void),
        )
        .with_operation(OperationSpec::new(LIST_CONTAINERS))
        .with_operation(OperationSpec::new(LIST_BLOBS).on(OutcomeKind::NotFound, Fallback::Empty))
        .with_operation(OperationSpec::new(GET_BLOB).on(OutcomeKind::NotFound, Fallback::Null))
        .with_operation(
            OperationSpec::new(GET_BLOB_PROPERTIES).on(OutcomeKind::NotFound, Fallback::Null),
        )
        .with_operation(OperationSpec::new(PUT_BLOB))
        .with_operation(OperationSpec::new(DELETE_BLOB).on(OutcomeKind::NotFound, Fallback::Void))
}
