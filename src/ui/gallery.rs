use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::config::Config;
use crate::images::cache::{ImageCache, ImageState};
use crate::state::data::Picture;
use crate::Message;

const REMOVE_LABEL: &str = "Удалить";

/// One full-width card per picture, stacked vertically
pub fn list_view<'a>(pictures: &[Picture], images: &ImageCache, config: &Config) -> Element<'a, Message> {
    let cards = pictures.iter().map(|picture| -> Element<'a, Message> {
        let details = row![
            text(picture.author.clone()).size(16).width(Length::Fill),
            remove_button(picture),
        ]
        .spacing(8)
        .padding(8)
        .align_y(Alignment::Center);

        container(column![
            preview(picture, images, Length::Fill, Length::Fixed(config.list_image_height)),
            details,
        ])
        .style(container::rounded_box)
        .width(Length::Fill)
        .into()
    });

    scrollable(column(cards).spacing(16).padding(16))
        .height(Length::Fill)
        .into()
}

/// Fixed-size tiles that wrap to fill the window width
pub fn grid_view<'a>(pictures: &[Picture], images: &ImageCache, config: &Config) -> Element<'a, Message> {
    let side = config.grid_tile_size;

    let tiles: Vec<Element<'a, Message>> = pictures
        .iter()
        .map(|picture| -> Element<'a, Message> {
            let tile = column![
                preview(picture, images, Length::Fixed(side), Length::Fixed(side)),
                text(picture.author.clone()).size(12),
                remove_button(picture).width(Length::Fill),
            ]
            .spacing(4)
            .width(Length::Fixed(side));

            // Spacing between tiles comes from each tile's own padding
            container(container(tile).style(container::rounded_box).padding(4))
                .padding(4)
                .into()
        })
        .collect();

    scrollable(container(Wrap::with_elements(tiles)).padding(16))
        .height(Length::Fill)
        .into()
}

/// The picture itself, or a placeholder while loading or after a failure
fn preview<'a>(picture: &Picture, images: &ImageCache, width: Length, height: Length) -> Element<'a, Message> {
    match images.get(&picture.url) {
        Some(ImageState::Loaded(handle)) => image(handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageState::Loading) => placeholder("Загрузка…", width, height),
        Some(ImageState::Failed) | None => placeholder("Изображение недоступно", width, height),
    }
}

fn placeholder<'a>(label: &'a str, width: Length, height: Length) -> Element<'a, Message> {
    container(text(label).size(12))
        .center_x(width)
        .center_y(height)
        .into()
}

fn remove_button<'a>(picture: &Picture) -> button::Button<'a, Message> {
    button(REMOVE_LABEL)
        .on_press(Message::RemovePicture(picture.clone()))
        .style(button::danger)
}
