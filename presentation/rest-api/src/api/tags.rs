use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Auth,
    Health,
    Products,
}
