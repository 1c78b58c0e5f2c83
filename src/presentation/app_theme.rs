use iced::widget::{button, container};
use iced::{gradient, Background, Border, Color, Degrees, Shadow, Theme};

use crate::core::models::ThemeMode;

pub const ERROR_TEXT_COLOR: Color = Color::from_rgb(0.973, 0.443, 0.443);
pub const SUCCESS_TEXT_COLOR: Color = Color::from_rgb(0.290, 0.871, 0.502);
pub const MUTED_TEXT_COLOR: Color = Color::from_rgb(0.612, 0.639, 0.686);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.067, 0.094, 0.153),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: Color::from_rgb(0.576, 0.200, 0.918),
                success: Color::from_rgb(0.290, 0.871, 0.502),
                danger: Color::from_rgb(0.973, 0.443, 0.443),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.486, 0.227, 0.929),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

/// Page backdrop: a gray to purple to violet sweep in dark mode, flat
/// palette background in light mode.
pub fn backdrop_style(mode: &ThemeMode) -> container::Style {
    let palette = get_theme(mode).palette();

    let background = match mode {
        ThemeMode::Dark => Background::Gradient(
            gradient::Linear::new(Degrees(135.0))
                .add_stop(0.0, Color::from_rgb(0.067, 0.094, 0.153))
                .add_stop(0.5, Color::from_rgb(0.345, 0.110, 0.529))
                .add_stop(1.0, Color::from_rgb(0.298, 0.114, 0.584))
                .into(),
        ),
        ThemeMode::Light => Background::Color(palette.background),
    };

    container::Style {
        background: Some(background),
        text_color: Some(palette.text),
        ..Default::default()
    }
}

pub fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.122, 0.161, 0.216, 0.5))),
        border: Border {
            color: Color::from_rgb(0.216, 0.255, 0.318),
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: iced::Vector::new(0.0, 8.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

fn filled_button_style(
    status: button::Status,
    active: Color,
    hovered: Color,
    pressed: Color,
) -> button::Style {
    let fill = match status {
        button::Status::Active => active,
        button::Status::Hovered => hovered,
        button::Status::Pressed => pressed,
        button::Status::Disabled => Color::from_rgb(0.3, 0.3, 0.3),
    };
    let text_color = match status {
        button::Status::Disabled => Color::from_rgb(0.5, 0.5, 0.5),
        _ => Color::WHITE,
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: fill,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
        snap: matches!(status, button::Status::Pressed),
    }
}

/// Purple, used for the dataset upload.
pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button_style(
        status,
        Color::from_rgb(0.576, 0.200, 0.918),
        Color::from_rgb(0.494, 0.133, 0.808),
        Color::from_rgb(0.420, 0.129, 0.659),
    )
}

/// Violet, used for the meme upload.
pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button_style(
        status,
        Color::from_rgb(0.486, 0.227, 0.929),
        Color::from_rgb(0.427, 0.157, 0.851),
        Color::from_rgb(0.357, 0.129, 0.714),
    )
}

pub fn search_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color::from_rgb(0.753, 0.518, 0.988),
        _ => MUTED_TEXT_COLOR,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_dark_mode() {
        let theme = get_theme(&ThemeMode::Dark);
        let palette = theme.palette();

        assert_eq!(palette.text, Color::from_rgb(1.0, 1.0, 1.0));
        assert_eq!(palette.primary, Color::from_rgb(0.576, 0.200, 0.918));
    }

    #[test]
    fn test_get_theme_light_mode() {
        let theme = get_theme(&ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.95, 0.95, 0.97));
        assert_eq!(palette.text, Color::from_rgb(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_dark_backdrop_is_a_gradient() {
        let style = backdrop_style(&ThemeMode::Dark);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
    }

    #[test]
    fn test_light_backdrop_is_flat() {
        let style = backdrop_style(&ThemeMode::Light);
        assert!(matches!(style.background, Some(Background::Color(_))));
    }

    #[test]
    fn test_primary_button_style_hover_is_darker_purple() {
        let theme = Theme::Dark;
        let active = primary_button_style(&theme, button::Status::Active);
        let hovered = primary_button_style(&theme, button::Status::Hovered);

        assert_eq!(
            active.background,
            Some(Background::Color(Color::from_rgb(0.576, 0.200, 0.918)))
        );
        assert_eq!(
            hovered.background,
            Some(Background::Color(Color::from_rgb(0.494, 0.133, 0.808)))
        );
        assert_eq!(active.text_color, Color::WHITE);
    }

    #[test]
    fn test_disabled_buttons_are_gray() {
        let theme = Theme::Dark;
        let style = secondary_button_style(&theme, button::Status::Disabled);

        assert_eq!(
            style.background,
            Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3)))
        );
        assert_eq!(style.text_color, Color::from_rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_only_pressed_buttons_snap() {
        let theme = Theme::Dark;

        assert!(primary_button_style(&theme, button::Status::Pressed).snap);
        assert!(!primary_button_style(&theme, button::Status::Active).snap);
    }

    #[test]
    fn test_button_styles_share_border_radius() {
        let theme = Theme::Dark;

        let primary = primary_button_style(&theme, button::Status::Active);
        let secondary = secondary_button_style(&theme, button::Status::Active);

        assert_eq!(primary.border.radius, 8.0.into());
        assert_eq!(secondary.border.radius, 8.0.into());
    }
}
