//! GraphQL operation definitions for the directory API.

use graphql_client::GraphQLQuery;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "../core/graphql/schema.graphql",
    query_path = "graphql/queries/users.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetUsers;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "../core/graphql/schema.graphql",
    query_path = "graphql/queries/users.graphql",
    response_derives = "Debug, Clone"
)]
pub struct CreateUser;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "../core/graphql/schema.graphql",
    query_path = "graphql/queries/users.graphql",
    response_derives = "Debug, Clone"
)]
pub struct UpdateUser;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "../core/graphql/schema.graphql",
    query_path = "graphql/queries/users.graphql",
    response_derives = "Debug, Clone"
)]
pub struct DeleteUser;
