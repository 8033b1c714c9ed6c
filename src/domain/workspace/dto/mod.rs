pub mod workspace_list_request;
