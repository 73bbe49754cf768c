mod app;

use image::{DynamicImage, GrayImage};
use log::info;

use crate::error::FilterError;

pub use app::PreviewApp;

#[derive(Debug, Clone)]
pub enum Message {
    KeyPressed,
}

/// Open a window titled `title` showing `img`; returns once a key is pressed or the window closes
pub fn show(img: &GrayImage, title: &str) -> Result<(), FilterError> {
    let rgba = DynamicImage::ImageLuma8(img.clone()).to_rgba8();
    let (width, height) = rgba.dimensions();
    let handle = iced::widget::image::Handle::from_rgba(width, height, rgba.into_raw());
    let title = title.to_string();

    info!("Showing preview, press any key in the window to exit");

    iced::application(
        move || PreviewApp::new(handle.clone()),
        PreviewApp::update,
        PreviewApp::view,
    )
    .title(move |_: &PreviewApp| title.clone())
    .subscription(PreviewApp::subscription)
    .window_size((width as f32, height as f32))
    .run()
    .map_err(|e| FilterError::Preview {
        message: e.to_string(),
    })
}
