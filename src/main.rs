use env_logger::{Builder, Target};
use iced::widget::{button, column, container, row, text, text_input, toggler};
use iced::{Alignment, Element, Length, Task, Theme};
use log::LevelFilter;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

mod config;
mod error;
mod images;
mod state;
mod ui;

use config::Config;
use error::GalleryError;
use images::cache::ImageCache;
use images::fetcher::{HttpImageFetcher, Thumbnail};
use state::catalog::Catalog;
use state::data::Picture;
use state::store::{GalleryStore, StoreEvent};

/// How the filtered pictures are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    List,
    Grid,
}

/// Main application state
struct PhotoGallery {
    config: Config,
    /// The pictures being shown
    store: GalleryStore,
    /// Source of sample pictures for the "add" action
    catalog: Catalog,
    /// Changes reported by the store's listener
    store_events: Rc<RefCell<Vec<StoreEvent>>>,
    images: ImageCache,
    fetcher: Arc<HttpImageFetcher>,
    /// Current contents of the search field
    search: String,
    layout: Layout,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User typed in the search field
    SearchChanged(String),
    /// User flipped the list/grid toggler (true = grid)
    LayoutToggled(bool),
    /// User clicked "add"
    AddPicture,
    /// User clicked "clear all"
    ClearAll,
    /// User clicked "remove" on a card
    RemovePicture(Picture),
    /// Background image fetch finished
    ImageResolved(String, Result<Thumbnail, GalleryError>),
}

impl PhotoGallery {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        let catalog = Catalog::default();
        let mut store = GalleryStore::with_pictures(catalog.sample_pictures());

        let store_events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&store_events);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let fetcher = Arc::new(HttpImageFetcher::new(
            config.max_retries,
            Duration::from_secs(config.fetch_timeout_secs),
        ));

        let layout = if config.start_in_grid {
            Layout::Grid
        } else {
            Layout::List
        };

        log::info!("Photo gallery initialized with {} pictures", store.len());

        let mut gallery = PhotoGallery {
            config,
            store,
            catalog,
            store_events,
            images: ImageCache::new(),
            fetcher,
            search: String::new(),
            layout,
        };

        let urls: Vec<String> = gallery.store.list().iter().map(|p| p.url.clone()).collect();
        let task = gallery.request_images(urls);

        (gallery, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(search) => {
                self.search = search;
                Task::none()
            }
            Message::LayoutToggled(grid) => {
                self.layout = if grid { Layout::Grid } else { Layout::List };
                Task::none()
            }
            Message::AddPicture => {
                let picture = self.catalog.next_sample_picture(self.store.list());
                log::info!("Adding picture {} from {}", picture.id, picture.url);
                self.store.add(picture);
                self.process_store_events()
            }
            Message::ClearAll => {
                self.store.clear();
                self.process_store_events()
            }
            Message::RemovePicture(picture) => {
                self.store.remove(&picture);
                self.process_store_events()
            }
            Message::ImageResolved(url, result) => {
                self.images.finish(url, result);
                Task::none()
            }
        }
    }

    /// Drain the store's change events and start fetches for new pictures
    fn process_store_events(&mut self) -> Task<Message> {
        let events = std::mem::take(&mut *self.store_events.borrow_mut());
        let mut added = Vec::new();
        let mut dropped = false;

        for event in events {
            match event {
                StoreEvent::Added(picture) => added.push(picture.url),
                StoreEvent::Removed(picture) => {
                    log::info!("Removed picture {} ({})", picture.id, picture.author);
                    dropped = true;
                }
                StoreEvent::Cleared => {
                    log::info!("Gallery cleared");
                    dropped = true;
                }
            }
        }

        if dropped {
            self.prune_images();
        }

        self.request_images(added)
    }

    /// Forget thumbnails whose url no picture in the store uses anymore
    fn prune_images(&mut self) {
        if self.store.is_empty() {
            self.images.clear();
        } else {
            let pictures = self.store.list();
            self.images
                .retain(|url| pictures.iter().any(|picture| picture.url == url));
        }

        log::debug!("{} thumbnails kept after pruning", self.images.len());
    }

    /// Launch background fetches for urls that are not loaded or loading
    fn request_images(&mut self, urls: Vec<String>) -> Task<Message> {
        let max_side = self.config.thumbnail_size;

        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .filter(|url| self.images.begin(url))
            .map(|url| {
                let fetcher = Arc::clone(&self.fetcher);
                Task::perform(
                    images::fetcher::resolve(fetcher, url.clone(), max_side),
                    move |result| Message::ImageResolved(url.clone(), result),
                )
            })
            .collect();

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let search = text_input("Поиск по автору", &self.search)
            .on_input(Message::SearchChanged)
            .padding(10);

        let layout_switch = row![
            text("Режим отображения:").width(Length::Fill),
            toggler(self.layout == Layout::Grid).on_toggle(Message::LayoutToggled),
            text(match self.layout {
                Layout::Grid => "Сетка",
                Layout::List => "Список",
            }),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let visible = self.store.filter_by_author(&self.search, true);

        let body: Element<Message> = if visible.is_empty() {
            container(text("Нет изображений"))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        } else {
            match self.layout {
                Layout::List => ui::gallery::list_view(&visible, &self.images, &self.config),
                Layout::Grid => ui::gallery::grid_view(&visible, &self.images, &self.config),
            }
        };

        let actions = row![
            button("Очистить всё").on_press(Message::ClearAll).padding(10),
            button("Добавить").on_press(Message::AddPicture).padding(10),
        ]
        .spacing(8);

        let content = column![
            text(&self.config.title).size(28),
            search,
            layout_switch,
            body,
            container(actions).align_right(Length::Fill),
        ]
        .spacing(12)
        .padding(16);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn title(&self) -> String {
        self.config.title.clone()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("photo_gallery", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = Config::load();

    iced::application(PhotoGallery::title, PhotoGallery::update, PhotoGallery::view)
        .theme(PhotoGallery::theme)
        .centered()
        .run_with(move || PhotoGallery::new(config))
}
