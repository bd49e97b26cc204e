use iced::widget::{button, column, container, image, row, scrollable, text, Space};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::gui::{Message, VisionLensApp};
use crate::session::{OperationKind, OperationState};

const ERROR_RED: Color = Color {
    r: 0.75,
    g: 0.1,
    b: 0.1,
    a: 1.0,
};

pub fn view(app: &VisionLensApp) -> Element<'_, Message> {
    let theme_btn = button(text(if app.config.dark_mode {
        "Light Mode ☀️"
    } else {
        "Dark Mode 🌙"
    }))
    .style(button::secondary)
    .on_press(Message::ToggleTheme);

    let header = row![
        text("Vision AI Image Captioning & Text Extraction").size(28),
        Space::with_width(Length::Fill),
        theme_btn,
    ]
    .align_y(Alignment::Center);

    let picker = button(text("📤 Click to Upload Image"))
        .padding(12)
        .on_press(Message::PickImage);

    let preview: Element<Message> = match &app.preview {
        Some(handle) => container(
            image::Image::<image::Handle>::new(handle.clone())
                .width(Length::Fixed(256.0))
                .height(Length::Fixed(256.0)),
        )
        .padding(10)
        .style(container::rounded_box)
        .into(),
        None => Space::with_height(0).into(),
    };

    let buttons = row![
        operation_button(app, OperationKind::Caption),
        operation_button(app, OperationKind::TextExtraction),
    ]
    .spacing(15);

    let mut content = column![header, picker, preview, buttons]
        .spacing(20)
        .align_x(Alignment::Center);

    if let Some(notice) = &app.notice {
        content = content.push(text(notice).style(|_: &Theme| text::Style {
            color: Some(ERROR_RED),
        }));
    }

    for kind in OperationKind::ALL {
        if let Some(panel) = operation_panel(kind, app.session.state(kind)) {
            content = content.push(panel);
        }
    }

    content = content.push(match app.service_status {
        Some(true) => text("✅ Service connected").style(text::secondary),
        Some(false) => text("❌ Service unreachable").style(text::secondary),
        None => text("Service not checked").style(text::secondary),
    });

    container(scrollable(content))
        .padding(30)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn operation_button(app: &VisionLensApp, kind: OperationKind) -> Element<'_, Message> {
    let pending = app.session.is_pending(kind);
    let label = match (kind, pending) {
        (_, true) => "⏳ Processing...",
        (OperationKind::Caption, false) => "🏷️ Get Caption",
        (OperationKind::TextExtraction, false) => "📄 Extract Text",
    };
    let style: fn(&Theme, button::Status) -> button::Style = match kind {
        OperationKind::Caption => button::primary,
        OperationKind::TextExtraction => button::success,
    };

    button(text(label))
        .padding(12)
        .style(style)
        .on_press_maybe((!pending).then_some(Message::Dispatch(kind)))
        .into()
}

fn operation_panel(kind: OperationKind, state: &OperationState) -> Option<Element<'_, Message>> {
    match state {
        OperationState::Succeeded(result) => {
            let heading = match kind {
                OperationKind::Caption => "📝 Caption:",
                OperationKind::TextExtraction => "📜 Extracted Text:",
            };
            Some(
                container(column![text(heading).size(18), text(result)].spacing(8))
                    .padding(15)
                    .width(Length::Fill)
                    .style(container::rounded_box)
                    .into(),
            )
        }
        OperationState::Failed(message) => Some(
            container(text(format!("⚠️ {}", message)).style(|_: &Theme| text::Style {
                color: Some(ERROR_RED),
            }))
            .padding(12)
            .width(Length::Fill)
            .into(),
        ),
        OperationState::Idle | OperationState::Pending => None,
    }
}
