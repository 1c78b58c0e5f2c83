use iced::widget::{column, container, image, responsive, row, scrollable, text, Space};
use iced::{Alignment, ContentFit, Element, Length};

use crate::core::models::MemeRecord;
use crate::global_constants;
use crate::presentation::app_theme;

#[derive(Debug, Clone)]
pub enum CardImage {
    Loading,
    Ready(image::Handle),
    Broken,
}

#[derive(Debug, Clone)]
pub struct MemeCard {
    pub record: MemeRecord,
    pub image: CardImage,
}

/// One card per meme record, rebuilt wholesale whenever the results are
/// replaced. `generation` is the search sequence that produced the cards.
#[derive(Debug, Default)]
pub struct ResultGridView {
    generation: u64,
    cards: Vec<MemeCard>,
}

pub fn columns_for_width(width: f32) -> usize {
    if width >= global_constants::GRID_THREE_COLUMN_MIN_WIDTH {
        3
    } else if width >= global_constants::GRID_TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

impl ResultGridView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cards(&self) -> &[MemeCard] {
        &self.cards
    }

    pub fn card_urls(&self) -> Vec<&str> {
        self.cards
            .iter()
            .map(|card| card.record.url.as_str())
            .collect()
    }

    pub fn replace_records(&mut self, generation: u64, records: &[MemeRecord]) {
        log::debug!(
            "[RESULT_GRID] Rebuilding grid #{} with {} cards",
            generation,
            records.len()
        );

        self.generation = generation;
        self.cards = records
            .iter()
            .cloned()
            .map(|record| MemeCard {
                record,
                image: CardImage::Loading,
            })
            .collect();
    }

    /// Stores a fetched image. Bytes that are not a recognisable image are
    /// shown as broken, the same as a failed fetch.
    pub fn apply_image(
        &mut self,
        generation: u64,
        index: usize,
        outcome: Result<Vec<u8>, String>,
    ) -> bool {
        if generation != self.generation {
            log::debug!(
                "[RESULT_GRID] Ignoring image for grid #{} (showing #{})",
                generation,
                self.generation
            );
            return false;
        }

        let Some(card) = self.cards.get_mut(index) else {
            return false;
        };

        card.image = match outcome {
            Ok(bytes) if ::image::guess_format(&bytes).is_ok() => {
                CardImage::Ready(image::Handle::from_bytes(bytes))
            }
            Ok(_) => {
                log::warn!("[RESULT_GRID] Unrecognised image data for {}", card.record.url);
                CardImage::Broken
            }
            Err(error) => {
                log::warn!(
                    "[RESULT_GRID] Failed to load {}: {}",
                    card.record.url,
                    error
                );
                CardImage::Broken
            }
        };
        true
    }

    pub fn render_ui<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        responsive(move |size| {
            let columns = columns_for_width(size.width);

            let rows = self.cards.chunks(columns).map(|chunk| -> Element<'a, Message> {
                let mut cells: Vec<Element<'a, Message>> =
                    chunk.iter().map(|card| render_card(card)).collect();
                while cells.len() < columns {
                    cells.push(Space::new().width(Length::FillPortion(1)).into());
                }
                row(cells).spacing(24).into()
            });

            scrollable(column(rows).spacing(24).width(Length::Fill))
                .height(Length::Fill)
                .into()
        })
        .into()
    }
}

fn render_card<'a, Message: 'a>(card: &'a MemeCard) -> Element<'a, Message> {
    let alt_text = card
        .record
        .title
        .as_deref()
        .unwrap_or(global_constants::MEME_CARD_FALLBACK_TITLE);

    let picture: Element<'a, Message> = match &card.image {
        CardImage::Ready(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(global_constants::GRID_CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        CardImage::Loading => placeholder(text("…").size(24)),
        CardImage::Broken => placeholder(
            column![text("🖼").size(32), text(alt_text).size(13)]
                .spacing(6)
                .align_x(Alignment::Center),
        ),
    };

    let caption = text(alt_text)
        .size(14)
        .style(|_theme: &iced::Theme| iced::widget::text::Style {
            color: Some(app_theme::MUTED_TEXT_COLOR),
        });

    container(column![picture, container(caption).padding([8, 12])])
        .width(Length::FillPortion(1))
        .style(app_theme::card_style)
        .into()
}

fn placeholder<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(global_constants::GRID_CARD_IMAGE_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(global_constants::GRID_CARD_IMAGE_HEIGHT))
        .into()
}
