//! Operations exposed by the Chef server binding and how each treats failures.

use cloudreq_core::{
    Classifier, ErrorFormat, Fallback, OperationSpec, OperationTable, OutcomeKind,
};

/// `GET /cookbooks`
pub const LIST_COOKBOOKS: &str = "list_cookbooks";
/// `GET /cookbooks/{name}`, `None` if the cookbook is unknown.
pub const GET_VERSIONS_OF_COOKBOOK: &str = "get_versions_of_cookbook";
/// `GET /cookbooks/{name}/{version}`, `None` if missing.
pub const GET_COOKBOOK: &str = "get_cookbook";
/// `PUT /cookbooks/{name}/{version}`
pub const UPDATE_COOKBOOK: &str = "update_cookbook";
/// `DELETE /cookbooks/{name}/{version}`, succeeds if already gone.
pub const DELETE_COOKBOOK: &str = "delete_cookbook";
/// `POST /sandboxes`
pub const GET_UPLOAD_URIS_FOR_CONTENT: &str = "get_upload_uris_for_content";
/// `GET /clients`
pub const LIST_CLIENTS: &str = "list_clients";
/// `POST /clients`
pub const CREATE_CLIENT: &str = "create_client";
/// `PUT /clients/{name}`
pub const GENERATE_KEY_FOR_CLIENT: &str = "generate_key_for_client";
/// `HEAD /clients/{name}`, `false` if missing.
pub const CLIENT_EXISTS: &str = "client_exists";
/// `GET /clients/{name}`, `None` if missing.
pub const GET_CLIENT: &str = "get_client";
/// `DELETE /clients/{name}`, `None` if missing.
pub const DELETE_CLIENT: &str = "delete_client";

/// Build the Chef server operation table.
pub fn table() -> OperationTable {
    let not_found = |name: &str, fallback: Fallback| {
        OperationSpec::new(name).on(OutcomeKind::NotFound, fallback)
    };

    OperationTable::new(Classifier::default(), ErrorFormat::Json)
        .with_operation(OperationSpec::new(LIST_COOKBOOKS))
        .with_operation(not_found(GET_VERSIONS_OF_COOKBOOK, Fallback::Null))
        .with_operation(not_found(GET_COOKBOOK, Fallback::Null))
        .with_operation(OperationSpec::new(UPDATE_COOKBOOK))
        .with_operation(not_found(DELETE_COOKBOOK, Fallback::Void))
        .with_operation(OperationSpec::new(GET_UPLOAD_URIS_FOR_CONTENT))
        .with_operation(OperationSpec::new(LIST_CLIENTS))
        .with_operation(OperationSpec::new(CREATE_CLIENT))
        .with_operation(OperationSpec::new(GENERATE_KEY_FOR_CLIENT))
        .with_operation(not_found(CLIENT_EXISTS, Fallback::False))
        .with_operation(not_found(GET_CLIENT, Fallback::Null))
        .with_operation(not_found(DELETE_CLIENT, Fallback::Null))
}
