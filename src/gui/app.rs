use iced::widget::{container, image};
use iced::{Element, Event, Length, Subscription, Task, event, keyboard};

use super::Message;

/// Single window showing one image until a key is pressed
pub struct PreviewApp {
    handle: image::Handle,
}

impl PreviewApp {
    pub fn new(handle: image::Handle) -> Self {
        Self { handle }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::KeyPressed => iced::exit(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        container(image(self.handle.clone()))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed { .. }) => Some(Message::KeyPressed),
            _ => None,
        })
    }
}
