use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ClientPayloadDoc {
    pub Name: String,
    pub Surname: String,
    pub Phonenumber: String,
    pub Email: String,
    pub Gender: Option<String>,
    pub Occupation: Option<String>,
    pub Marital_Status: Option<String>,
    pub Nationality: Option<String>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct LawyerPayloadDoc {
    pub Title: String,
    pub Name: String,
    pub Surname: String,
    pub Phonenumber: String,
    pub Email: String,
    pub Case_Category: String,
    pub Experience: Option<String>,
    pub Nationality: Option<String>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct CasePayloadDoc {
    pub Case_name: String,
    pub Description: String,
    pub Documents: Vec<String>,
    pub Timeline: String,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct WitnessPayloadDoc {
    pub Fullname: String,
    pub national_id: String,
    pub Testimony: String,
}

#[derive(ToSchema)]
pub struct StateUpdateDoc { pub state: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clients::list,
        crate::routes::clients::create,
        crate::routes::clients::get,
        crate::routes::lawyers::list,
        crate::routes::lawyers::create,
        crate::routes::lawyers::get,
        crate::routes::cases::list,
        crate::routes::cases::create,
        crate::routes::cases::get,
        crate::routes::cases::delete,
        crate::routes::cases::assign_lawyer,
        crate::routes::cases::update_state,
        crate::routes::witnesses::list,
        crate::routes::witnesses::create,
        crate::routes::witnesses::get,
    ),
    components(
        schemas(
            HealthResponse,
            ClientPayloadDoc,
            LawyerPayloadDoc,
            CasePayloadDoc,
            WitnessPayloadDoc,
            StateUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "clients"),
        (name = "lawyers"),
        (name = "cases"),
        (name = "witnesses")
    )
)]
pub struct ApiDoc;
