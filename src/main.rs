use iced::widget::{button, column, container, image, text, vertical_space, Column};
use iced::{Alignment, ContentFit, Element, Length, Task, Theme};

// Declare the viewer modules
mod display;
mod picker;

use display::mount::Document;
use picker::catalog::{ImageCatalog, Selection};
use picker::random::ThreadRandom;

/// Main application state
struct CooperViewer {
    /// The fixed photo catalog, built once at startup
    catalog: ImageCatalog,
    /// Model of the hosting page and its mount slot
    page: Document,
    /// The photo currently on display
    current: Option<Selection>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The window finished loading; show the first photo
    PageLoaded,
    /// User asked for a fresh draw
    ShowAnother,
}

impl CooperViewer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let catalog = ImageCatalog::new();

        // The page carries exactly one slot: the image container
        let mut page = Document::new();
        page.register(display::MOUNT_ID);

        println!("🐶 Cooper viewer ready with {} photos in the catalog", catalog.len());

        (
            CooperViewer {
                catalog,
                page,
                current: None,
                status: String::from("Loading..."),
            },
            // The load signal fires exactly once per window lifetime
            Task::done(Message::PageLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // A fresh draw works exactly like the initial load
            Message::PageLoaded | Message::ShowAnother => {
                match display::display_random_image(&self.catalog, &mut self.page, &mut ThreadRandom)
                {
                    Ok(selection) => {
                        println!("🖼️  Now showing {}", selection);
                        self.status = format!("Showing {}", selection);
                        self.current = Some(selection);
                    }
                    Err(e) => {
                        // Nothing gets mounted; the container stays empty
                        eprintln!("⚠️  {}", e);
                    }
                }

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        // Fill the container's width, keep the photo's aspect ratio
        let photo: Element<Message> = match &self.current {
            Some(selection) => image(image::Handle::from_path(selection.as_path()))
                .width(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            None => vertical_space().into(),
        };

        let content: Column<Message> = column![
            text("Cooper")
                .size(48),

            photo,

            button("Show me another")
                .on_press(Message::ShowAnother)
                .padding(10),

            text(&self.status)
                .size(16),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Cooper",
        CooperViewer::update,
        CooperViewer::view,
    )
    .theme(CooperViewer::theme)
    .centered()
    .run_with(CooperViewer::new)
}
