use axum::Json;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;
use vibe_domain::config::SiteConfig;
use vibe_domain::constants::PUBLIC_TAG;
use vibe_kernel::prelude::AppState;

/// Non-secret configuration subset for the frontend.
///
/// Built field by field from the configuration snapshot; `ServiceConfig`
/// does not implement `Serialize`, so secrets cannot end up here by
/// accident.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfigResponse {
    pub site: PublicSite,
    /// `development` or `production`
    pub environment: &'static str,
    /// Effectively enabled capability names, declaration order
    pub features: Vec<&'static str>,
}

/// Site metadata on the wire.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicSite {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub og_image: String,
    pub twitter_handle: String,
    pub contact: PublicContact,
    pub legal: PublicLegal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicContact {
    pub email: String,
    pub company: String,
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicLegal {
    pub privacy_policy: String,
    pub terms_of_service: String,
}

impl From<&SiteConfig> for PublicSite {
    fn from(site: &SiteConfig) -> Self {
        Self {
            name: site.name.clone(),
            tagline: site.tagline.clone(),
            description: site.description.clone(),
            og_image: site.og_image.clone(),
            twitter_handle: site.twitter_handle.clone(),
            contact: PublicContact {
                email: site.contact.email.clone(),
                company: site.contact.company.clone(),
                address: site.contact.address.clone(),
            },
            legal: PublicLegal {
                privacy_policy: site.legal.privacy_policy.clone(),
                terms_of_service: site.legal.terms_of_service.clone(),
            },
        }
    }
}

#[utoipa::path(
    get,
    path = "/config",
    responses((status = OK, description = "Public, non-sensitive configuration", body = PublicConfigResponse)),
    tag = PUBLIC_TAG,
)]
pub(crate) async fn config_handler(State(state): State<AppState>) -> Json<PublicConfigResponse> {
    Json(PublicConfigResponse {
        site: PublicSite::from(&state.config.site),
        environment: state.config.environment.label(),
        features: state.features.enabled_names(),
    })
}
