use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RegisterUserDoc { pub username: String, pub password: String, pub name: String }

#[derive(ToSchema)]
pub struct LoginUserDoc { pub username: String, pub password: String }

#[derive(ToSchema)]
pub struct UpdateUserDoc { pub name: Option<String>, pub password: Option<String> }

#[derive(ToSchema)]
pub struct ContactDoc {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(ToSchema)]
pub struct AddressDoc {
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::register,
        crate::routes::users::login,
        crate::routes::users::current,
        crate::routes::users::update,
        crate::routes::users::logout,
        crate::routes::contacts::create,
        crate::routes::contacts::search,
        crate::routes::contacts::get,
        crate::routes::contacts::update,
        crate::routes::contacts::remove,
        crate::routes::addresses::create,
        crate::routes::addresses::list,
        crate::routes::addresses::get,
        crate::routes::addresses::update,
        crate::routes::addresses::remove,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterUserDoc,
            LoginUserDoc,
            UpdateUserDoc,
            ContactDoc,
            AddressDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "contacts"),
        (name = "addresses")
    )
)]
pub struct ApiDoc;
