//! GraphQL documents sent to the launch API

/// Operation name of [`GET_LAUNCHES`]
pub const GET_LAUNCHES_OP: &str = "GetLaunches";

/// Recent launches, optionally limited
pub const GET_LAUNCHES: &str = r#"query GetLaunches($limit: Int) {
  launches(limit: $limit) {
    id
    mission_name
    launch_date_local
    launch_success
    rocket {
      rocket_name
      rocket_type
    }
    links {
      mission_patch_small
      wikipedia
    }
  }
}"#;

/// Operation name of [`GET_LAUNCH`]
pub const GET_LAUNCH_OP: &str = "GetLaunch";

/// A single launch with details
pub const GET_LAUNCH: &str = r#"query GetLaunch($id: ID!) {
  launch(id: $id) {
    id
    mission_name
    launch_date_local
    launch_success
    details
    rocket {
      rocket_name
      rocket_type
    }
    links {
      mission_patch
      wikipedia
      video_link
    }
  }
}"#;

/// Operation name of [`GET_ROCKETS`]
pub const GET_ROCKETS_OP: &str = "GetRockets";

pub const GET_ROCKETS: &str = r#"query GetRockets {
  rockets {
    id
    name
    type
    active
    cost_per_launch
    success_rate_pct
    first_flight
    country
    company
  }
}"#;

// Mutation documents for servers that support todo persistence. Nothing in
// this crate sends them; the local store is authoritative.

pub const CREATE_TODO: &str = r#"mutation CreateTodo($input: CreateTodoInput!) {
  createTodo(input: $input) {
    id
    text
    completed
    createdAt
  }
}"#;

pub const UPDATE_TODO: &str = r#"mutation UpdateTodo($id: ID!, $input: UpdateTodoInput!) {
  updateTodo(id: $id, input: $input) {
    id
    text
    completed
    updatedAt
  }
}"#;

pub const DELETE_TODO: &str = r#"mutation DeleteTodo($id: ID!) {
  deleteTodo(id: $id) {
    id
  }
}"#;
