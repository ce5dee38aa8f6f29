use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::api::{ApiClient, ApiError, Auth, Endpoint};
use crate::models::Profile;

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    user: Profile,
}

#[derive(Debug, Deserialize)]
struct EmailResponse {
    email: String,
}

#[derive(Debug, Deserialize)]
struct PhoneResponse {
    phone: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    profile_image: String,
}

/// Profile read and update. Every call requires a token.
#[derive(Debug, Clone)]
pub struct ProfileService {
    client: ApiClient,
}

impl ProfileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /profile`
    pub async fn get(&self) -> Result<Profile, ApiError> {
        let request = self
            .client
            .request(Method::GET, Endpoint::Profile, Auth::Required)?;
        let response: ProfileResponse = self.client.send(request).await?;
        Ok(response.user)
    }

    /// `PUT /profile/email`. Returns the email as stored by the server.
    pub async fn update_email(&self, email: &str) -> Result<String, ApiError> {
        if email.trim().is_empty() {
            return Err(ApiError::validation("Please enter an email address"));
        }
        let request = self
            .client
            .request(Method::PUT, Endpoint::ProfileEmail, Auth::Required)?
            .json(&json!({ "email": email }));
        let response: EmailResponse = self.client.send(request).await?;
        info!("profile email updated");
        Ok(response.email)
    }

    /// `PUT /profile/phone`. Returns the phone number as stored by the server.
    pub async fn update_phone(&self, phone: &str) -> Result<String, ApiError> {
        if phone.trim().is_empty() {
            return Err(ApiError::validation("Please enter a phone number"));
        }
        let request = self
            .client
            .request(Method::PUT, Endpoint::ProfilePhone, Auth::Required)?
            .json(&json!({ "phone": phone }));
        let response: PhoneResponse = self.client.send(request).await?;
        info!("profile phone updated");
        Ok(response.phone)
    }

    /// `POST /profile/upload-image` as multipart field `image`.
    ///
    /// Returns the URL the server stored the image under.
    pub async fn upload_image(&self, jpeg: Vec<u8>) -> Result<String, ApiError> {
        if jpeg.is_empty() {
            return Err(ApiError::validation("Image is empty"));
        }
        let part = Part::bytes(jpeg)
            .file_name("profile.jpg")
            .mime_str("image/jpeg")
            .map_err(ApiError::Client)?;
        let form = Form::new().part("image", part);

        let request = self
            .client
            .upload(Endpoint::ProfileUploadImage, Auth::Required, form)?;
        let response: UploadResponse = self.client.send(request).await?;
        info!("profile image uploaded");
        Ok(response.profile_image)
    }

    /// `PUT /profile/image` pointing the profile at an already hosted image.
    pub async fn set_image_url(&self, url: &str) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::PUT, Endpoint::ProfileImage, Auth::Required)?
            .json(&json!({ "profileImage": url }));
        self.client.send_empty(request).await
    }
}
