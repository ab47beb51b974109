use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct UrlCreateRequest {
    #[serde(alias = "origUrl")]
    pub orig_url: String,
}
