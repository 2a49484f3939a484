//! JSON REST handlers for persons.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use persons_app::ports::PersonRepository;
use persons_domain::error::ValidationError;
use persons_domain::id::PersonId;
use persons_domain::person::{NewPerson, Person, PersonUpdate};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a person.
///
/// `name` is optional here so a missing or `null` name is reported as a
/// validation error rather than a JSON rejection.
#[derive(Deserialize)]
pub struct PersonRequest {
    pub name: Option<String>,
    #[serde(default, with = "persons_domain::codec::base64_data")]
    pub data: Option<Vec<u8>>,
}

/// Query string for the search endpoint.
#[derive(Deserialize)]
pub struct SearchQuery {
    pub name: String,
    /// Match the whole name instead of a case-insensitive substring.
    #[serde(default)]
    pub exact: bool,
}

/// Possible responses from the list and search endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Person>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Person>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Person>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<PersonId, ApiError> {
    PersonId::from_str(raw).map_err(ApiError::from)
}

/// `GET /api/persons` — list all persons.
pub async fn list<PR>(State(state): State<AppState<PR>>) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let persons = state.person_service.list_persons().await?;
    Ok(ListResponse::Ok(Json(persons)))
}

/// `GET /api/persons/:id` — get person by ID.
pub async fn get<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let person_id = parse_id(&id)?;
    let person = state.person_service.get_person(person_id).await?;
    Ok(GetResponse::Ok(Json(person)))
}

/// `POST /api/persons` — create a new person.
pub async fn create<PR>(
    State(state): State<AppState<PR>>,
    Json(req): Json<PersonRequest>,
) -> Result<CreateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let mut builder = NewPerson::builder();
    if let Some(name) = req.name {
        builder = builder.name(name);
    }
    if let Some(data) = req.data {
        builder = builder.data(data);
    }

    let person = builder.build()?;
    let created = state.person_service.create_person(person).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/persons/:id` — overwrite name and data of an existing person.
pub async fn update<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
    Json(req): Json<PersonRequest>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let person_id = parse_id(&id)?;

    let Some(name) = req.name else {
        // An unknown id still answers 404 before the body is rejected.
        state.person_service.get_person(person_id).await?;
        return Err(ValidationError::MissingName.into());
    };

    let update = PersonUpdate {
        name,
        data: req.data,
    };
    let updated = state
        .person_service
        .update_person(person_id, update)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/persons/:id` — delete a person.
pub async fn delete<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let person_id = parse_id(&id)?;
    state.person_service.delete_person(person_id).await?;
    Ok(DeleteResponse::NoContent)
}

/// `GET /api/persons/search?name=` — case-insensitive substring search,
/// or exact match with `exact=true`.
pub async fn search<PR>(
    State(state): State<AppState<PR>>,
    Query(query): Query<SearchQuery>,
) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let persons = if query.exact {
        state.person_service.find_persons_by_name(&query.name).await?
    } else {
        state.person_service.search_persons(&query.name).await?
    };
    Ok(ListResponse::Ok(Json(persons)))
}
