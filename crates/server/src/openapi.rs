use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CustomerInputDoc {
    /// Only read by `PUT /customer/update`.
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    /// `YYYY-MM-DD`, not in the future.
    pub date_of_birth: String,
    pub mobile_no: String,
    pub address_line_one: String,
    pub address_line_two: String,
    pub age: i64,
    /// 0 male, 1 female.
    pub gender: i64,
    pub email: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CustomerDoc {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub mobile_no: String,
    pub address_line_one: String,
    pub address_line_two: String,
    pub age: i32,
    pub gender: i16,
    pub email: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::create,
        crate::routes::customers::update,
        crate::routes::customers::update_by_body,
        crate::routes::customers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            CustomerInputDoc,
            CustomerDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customer")
    )
)]
pub struct ApiDoc;
