//! GUI module using iced
//!
//! Binds an analysis session to a window: pick an image, run either
//! operation, and show each channel's result or error inline.

use iced::widget::image;
use iced::{Element, Task};
use tracing::{debug, warn};

use crate::image::SelectedImage;
use crate::session::{perform, NO_IMAGE_NOTICE};

// Sub-modules
pub mod app;
pub mod messages;
pub mod view;

// Re-exports for convenience
pub use app::VisionLensApp;
pub use messages::Message;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

/// Open the native file dialog and read the chosen image
pub async fn pick_image_task() -> Option<SelectedImage> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Select an image")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
        .await?;

    match SelectedImage::load(handle.path()).await {
        Ok(image) => Some(image),
        Err(e) => {
            warn!("⚠️ Could not read {}: {}", handle.file_name(), e);
            None
        }
    }
}

impl VisionLensApp {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                return Task::perform(pick_image_task(), Message::ImagePicked);
            }
            Message::ImagePicked(Some(picked)) => {
                self.preview = Some(image::Handle::from_bytes(picked.bytes().to_vec()));
                self.notice = None;
                self.session.select_image(picked);
            }
            Message::ImagePicked(None) => {
                debug!("📂 File dialog closed without a selection");
            }
            Message::Dispatch(kind) => {
                if self.session.image().is_none() {
                    self.notice = Some(NO_IMAGE_NOTICE.to_string());
                    return Task::none();
                }
                let Some(service) = self.service.clone() else {
                    self.notice = Some("Vision service is not configured.".to_string());
                    return Task::none();
                };

                match self.session.dispatch(kind) {
                    Ok(dispatch) => {
                        self.notice = None;
                        return Task::perform(perform(service, dispatch), Message::Settled);
                    }
                    Err(e) => {
                        warn!("⚠️ Could not dispatch {}: {}", kind, e);
                        self.notice = Some(e.to_string());
                    }
                }
            }
            Message::Settled(settlement) => {
                self.session.settle(settlement);
            }
            Message::HealthCheck => {
                if let Some(service) = self.service.clone() {
                    return Task::perform(
                        async move { service.health_check().await },
                        Message::HealthResponse,
                    );
                }
            }
            Message::HealthResponse(healthy) => {
                self.service_status = Some(healthy);
            }
            Message::ToggleTheme => {
                self.config.dark_mode = !self.config.dark_mode;
                if let Err(e) = self.config.save() {
                    warn!("⚠️ Could not save theme preference: {}", e);
                }
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
