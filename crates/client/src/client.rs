use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use career_core::aggregate::{self, ProgressMap};
use career_core::catalog::RoadmapDefinition;
use career_core::model::{Percentage, Profile};
use career_core::Catalog;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cache::SessionCache;
use crate::error::ClientError;

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Signup form fields as the person typed them.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupFields {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub dream_job: String,
    pub daily_time: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressRequest<'a> {
    user_id: &'a str,
    roadmap_id: &'a str,
    progress: f64,
}

#[derive(Deserialize)]
struct ProgressResponse {
    progress: Percentage,
}

#[derive(Deserialize)]
struct ProgressListResponse {
    progress: ProgressMap,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// API client holding one signed-in session.
///
/// Reads go to the server first. When the server cannot be reached the
/// cached copy is returned instead; a server that answers with an error is
/// never papered over.
pub struct CareerClient {
    http: Client,
    base_url: String,
    catalog: Catalog,
    cache: Mutex<SessionCache>,
}

impl CareerClient {
    /// # Errors
    ///
    /// Returns `ClientError::Unavailable` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Unavailable)?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            catalog: Catalog::builtin(),
            cache: Mutex::new(SessionCache::default()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn cache(&self) -> MutexGuard<'_, SessionCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn signed_in(&self) -> Result<Profile, ClientError> {
        self.cache().profile.clone().ok_or(ClientError::NotLoggedIn)
    }

    fn roadmap(&self, roadmap_id: &str) -> Result<&'static RoadmapDefinition, ClientError> {
        self.catalog
            .roadmap(roadmap_id)
            .ok_or_else(|| ClientError::UnknownRoadmap(roadmap_id.to_string()))
    }

    /// Create an account and start a session for it.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Rejected` for invalid fields (400) or a taken
    /// email (409), `ClientError::Unavailable` if the server is unreachable.
    pub async fn sign_up(&self, fields: &SignupFields) -> Result<Profile, ClientError> {
        let response = self
            .http
            .post(self.url("/users"))
            .json(fields)
            .send()
            .await
            .map_err(ClientError::Unavailable)?;
        let profile: Profile = read_json(response).await?;

        self.cache().start(profile.clone());
        debug!(user_id = %profile.id, "signed up");
        Ok(profile)
    }

    /// Start a session. The progress map is fetched right after; if that
    /// fetch fails the session still starts with an empty map.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Rejected` with status 401 for bad credentials,
    /// `ClientError::Unavailable` if the server is unreachable.
    pub async fn log_in(&self, email: &str, secret: &str) -> Result<Profile, ClientError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(&LoginRequest {
                email,
                password: secret,
            })
            .send()
            .await
            .map_err(ClientError::Unavailable)?;
        let profile: Profile = read_json(response).await?;

        self.cache().start(profile.clone());
        debug!(user_id = %profile.id, "logged in");

        if let Err(e) = self.refresh_progress().await {
            warn!(error = %e, "could not load progress after login");
        }
        Ok(profile)
    }

    /// Forget the session and everything cached for it.
    pub fn log_out(&self) {
        self.cache().clear();
    }

    #[must_use]
    pub fn cached_profile(&self) -> Option<Profile> {
        self.cache().profile.clone()
    }

    /// Fetch the progress map, falling back to the cache when the server
    /// cannot be reached.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotLoggedIn` without a session, or
    /// `ClientError::Rejected` / `ClientError::InvalidResponse` when the
    /// server answers badly.
    pub async fn refresh_progress(&self) -> Result<ProgressMap, ClientError> {
        let profile = self.signed_in()?;
        let fetched = self
            .fetch::<ProgressListResponse>(&format!("/progress/{}", profile.id))
            .await;

        match fetched {
            Ok(body) => {
                let mut cache = self.cache();
                cache.replace_progress(body.progress.clone(), &self.catalog);
                Ok(body.progress)
            }
            Err(e) if e.is_unavailable() => {
                warn!(error = %e, "serving cached progress");
                Ok(self.cache().progress.clone())
            }
            Err(e) => Err(e),
        }
    }

    /// Stored percentage for one roadmap, 0 if untouched.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::UnknownRoadmap` for an id outside the catalog;
    /// otherwise see [`CareerClient::refresh_progress`].
    pub async fn roadmap_progress(&self, roadmap_id: &str) -> Result<Percentage, ClientError> {
        let profile = self.signed_in()?;
        let roadmap = self.roadmap(roadmap_id)?;
        self.live_roadmap_progress(&profile, roadmap).await
    }

    /// Dashboard overall figure: mean over touched roadmaps.
    ///
    /// # Errors
    ///
    /// See [`CareerClient::refresh_progress`].
    pub async fn overall_progress(&self) -> Result<f64, ClientError> {
        let progress = self.refresh_progress().await?;
        Ok(aggregate::overall_progress(&progress))
    }

    /// Checked steps for a roadmap, in catalog order.
    ///
    /// Steps toggled in this session are remembered exactly while the server
    /// still agrees with them; otherwise they are rebuilt from the stored
    /// percentage as a prefix of the roadmap.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotLoggedIn` or `ClientError::UnknownRoadmap`;
    /// otherwise see [`CareerClient::refresh_progress`].
    pub async fn completed_steps(
        &self,
        roadmap_id: &str,
    ) -> Result<Vec<&'static str>, ClientError> {
        let profile = self.signed_in()?;
        let roadmap = self.roadmap(roadmap_id)?;
        self.live_roadmap_progress(&profile, roadmap).await?;
        let checked = self.cache().checked_steps(roadmap);
        Ok(roadmap
            .steps
            .iter()
            .map(|step| step.id)
            .filter(|id| checked.contains(id))
            .collect())
    }

    /// Mark one step done or not done and store the new roadmap percentage.
    ///
    /// The checked set starts from the server's current percentage, so steps
    /// ticked by another session are kept. The cache only changes once the
    /// server has accepted the update.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotLoggedIn`, `ClientError::UnknownRoadmap` or
    /// `ClientError::UnknownStep` before any request is made, and
    /// `ClientError::Rejected` / `ClientError::Unavailable` if the upsert
    /// fails.
    pub async fn set_step_progress(
        &self,
        roadmap_id: &str,
        step_id: &str,
        completed: bool,
    ) -> Result<Percentage, ClientError> {
        let profile = self.signed_in()?;
        let roadmap = self.roadmap(roadmap_id)?;
        let step = roadmap.step(step_id).ok_or_else(|| ClientError::UnknownStep {
            roadmap: roadmap_id.to_string(),
            step: step_id.to_string(),
        })?;

        self.live_roadmap_progress(&profile, roadmap).await?;
        let mut checked: BTreeSet<&'static str> = self.cache().checked_steps(roadmap);
        if completed {
            checked.insert(step.id);
        } else {
            checked.remove(step.id);
        }
        let percentage = aggregate::roadmap_percentage(roadmap, checked.iter());

        let response = self
            .http
            .post(self.url("/progress"))
            .json(&ProgressRequest {
                user_id: profile.id.as_str(),
                roadmap_id: roadmap.id,
                progress: percentage.value(),
            })
            .send()
            .await
            .map_err(ClientError::Unavailable)?;
        let stored: ProgressResponse = read_json(response).await?;

        self.cache().commit_steps(roadmap, checked, stored.progress);
        debug!(roadmap_id, step_id, progress = stored.progress.value(), "step updated");
        Ok(stored.progress)
    }

    /// Fetch one roadmap's stored percentage and fold it into the cache,
    /// serving the cached value when the server cannot be reached.
    async fn live_roadmap_progress(
        &self,
        profile: &Profile,
        roadmap: &'static RoadmapDefinition,
    ) -> Result<Percentage, ClientError> {
        let fetched = self
            .fetch::<ProgressResponse>(&format!("/progress/{}/{}", profile.id, roadmap.id))
            .await;

        match fetched {
            Ok(body) => {
                self.cache().reconcile_roadmap(roadmap, body.progress);
                Ok(body.progress)
            }
            Err(e) if e.is_unavailable() => {
                warn!(error = %e, roadmap_id = roadmap.id, "serving cached roadmap progress");
                Ok(self.cache().percentage(roadmap.id))
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(ClientError::Unavailable)?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        return Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    response.json::<T>().await.map_err(|e| {
        if e.is_timeout() {
            ClientError::Unavailable(e)
        } else {
            ClientError::InvalidResponse(e.to_string())
        }
    })
}
