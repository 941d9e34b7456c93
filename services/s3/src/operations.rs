//! Operations exposed by the S3 binding and how each treats failures.

use cloudreq_core::{
    Classifier, ErrorFormat, Fallback, OperationSpec, OperationTable, OutcomeKind,
};

/// `PUT /bucket`, returns `false` if the bucket was already there.
pub const CREATE_BUCKET: &str = "create_bucket";
/// `DELETE /bucket`, returns `true` once the bucket is gone.
pub const DELETE_BUCKET: &str = "delete_bucket";
/// `HEAD /bucket`
pub const BUCKET_EXISTS: &str = "bucket_exists";
/// `GET /`
pub const LIST_BUCKETS: &str = "list_buckets";
/// `GET /bucket`
pub const LIST_OBJECTS: &str = "list_objects";
/// `GET /bucket/key`
pub const GET_OBJECT: &str = "get_object";
/// `HEAD /bucket/key`
pub const HEAD_OBJECT: &str = "head_object";
/// `PUT /bucket/key`
pub const PUT_OBJECT: &str = "put_object";
/// `DELETE /bucket/key`
pub const DELETE_OBJECT: &str = "delete_object";

/// Build the S3 operation table.
pub fn table() -> OperationTable {
    let classifier = Classifier::default()
        .with_retryable_code("SlowDown")
        .with_retryable_code("RequestTimeout")
        .with_not_found_code("NoSuchBucket")
        .with_not_found_code("NoSuchKey");

    OperationTable::new(classifier, ErrorFormat::S3Xml)
        .with_operation(
            OperationSpec::new(CREATE_BUCKET)
                .exempt("BucketAlreadyOwnedByYou")
                .benign_illegal_state()
                .on(OutcomeKind::KnownBenignFailure, Fallback::False),
        )
        .with_operation(
            OperationSpec::new(DELETE_BUCKET).on(OutcomeKind::NotFound, Fallback::True),
        )
        .with_operation(
            OperationSpec::new(BUCKET_EXISTS).on(OutcomeKind::NotFound, Fallback::False),
        )
        .with_operation(OperationSpec::new(LIST_BUCKETS))
        .with_operation(
            OperationSpec::new(LIST_OBJECTS).on(OutcomeKind::NotFound, Fallback::Empty),
        )
        .with_operation(OperationSpec::new(GET_OBJECT).on(OutcomeKind::NotFound, Fallback::Null))
        .with_operation(OperationSpec::new(HEAD_OBJECT).on(OutcomeKind::NotFound, Fallback::Null))
        .with_operation(OperationSpec::new(PUT_OBJECT))
        .with_operation(
            OperationSpec::new(DELETE_OBJECT).on(OutcomeKind::NotFound, Fallback::Void),
        )
}
