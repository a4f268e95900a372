use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MoodQuery {
    /// One of happy, emotional, thriller, romantic, scifi, family, action.
    #[serde(rename = "type")]
    pub mood: Option<String>,
}
