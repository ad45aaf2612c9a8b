//! End-to-end token builds across modes, overrides and branding.

use httpmock::MockServer;
use httpmock::prelude::*;
use tinct_branding::{BrandLoader, BrandOverride, SettingsEndpoint};
use tinct_theme::{
    RichColorInput, ThemeColorsInput, ThemeMode, create_colors, gradient, input::TextColorsInput,
    modes, palette,
};

fn brand_from_fixture() -> anyhow::Result<BrandOverride> {
    Ok(serde_json::from_value(
        tinct_test_support::fixtures::brand_document(),
    )?)
}

#[test]
fn every_mode_produces_a_complete_token_set() -> anyhow::Result<()> {
    let brand = brand_from_fixture()?;
    for (mode, branding) in [
        (ThemeMode::Dark, None),
        (ThemeMode::Light, None),
        (ThemeMode::Custom, Some(&brand)),
    ] {
        let input = ThemeColorsInput {
            mode: Some(mode),
            ..ThemeColorsInput::default()
        };
        let colors = create_colors(input, branding)?;
        for intent in [
            &colors.primary,
            &colors.secondary,
            &colors.info,
            &colors.error,
            &colors.success,
            &colors.warning,
        ] {
            assert!(!intent.main.is_empty());
            assert!(!intent.shade.is_empty());
            assert!(!intent.text.is_empty());
            assert!(!intent.border.is_empty());
            assert!(!intent.transparent.is_empty());
            assert!(!intent.border_transparent.is_empty());
            assert!(!intent.contrast_text.is_empty());
        }
        assert!(!colors.gradients.brand_horizontal.is_empty());
        assert!(!colors.gradients.brand_vertical.is_empty());
    }
    Ok(())
}

#[test]
fn shade_follows_mode_direction() -> anyhow::Result<()> {
    let overridden = |mode| ThemeColorsInput {
        mode: Some(mode),
        primary: RichColorInput {
            main: Some("#0073bc".to_string()),
            text: Some("#0073bc".to_string()),
            border: Some("#0073bc".to_string()),
            shade: None,
            ..RichColorInput::default()
        },
        ..ThemeColorsInput::default()
    };

    let dark = create_colors(overridden(ThemeMode::Dark), None)?;
    assert!((dark.tonal_offset - 0.15).abs() < f64::EPSILON);
    assert_eq!(dark.primary.shade, tinct_color::lighten("#0073bc", 0.15)?);

    let light = create_colors(overridden(ThemeMode::Light), None)?;
    assert!((light.tonal_offset - 0.2).abs() < f64::EPSILON);
    assert_eq!(light.primary.shade, tinct_color::darken("#0073bc", 0.2)?);
    Ok(())
}

#[test]
fn merging_the_base_onto_itself_changes_nothing() -> anyhow::Result<()> {
    let dark = modes::dark();
    let input = ThemeColorsInput {
        mode: Some(ThemeMode::Dark),
        primary: dark.primary.clone(),
        secondary: dark.secondary.clone(),
        text: TextColorsInput {
            primary: Some(dark.text.primary.clone()),
            secondary: Some(dark.text.secondary.clone()),
            disabled: Some(dark.text.disabled.clone()),
            link: Some(dark.text.link.clone()),
            max_contrast: Some(dark.text.max_contrast.clone()),
        },
        contrast_threshold: Some(dark.contrast_threshold),
        hover_factor: Some(dark.hover_factor),
        tonal_offset: Some(dark.tonal_offset),
        ..ThemeColorsInput::default()
    };
    let rebuilt = create_colors(input, None)?;
    let baseline = create_colors(ThemeColorsInput::default(), None)?;
    assert_eq!(rebuilt, baseline);
    Ok(())
}

#[test]
fn custom_mode_resolves_branding() -> anyhow::Result<()> {
    let brand = brand_from_fixture()?;
    let input = ThemeColorsInput {
        mode: Some(ThemeMode::Custom),
        ..ThemeColorsInput::default()
    };
    let colors = create_colors(input, Some(&brand))?;

    assert_eq!(colors.mode, ThemeMode::Custom);
    assert_eq!(colors.background.canvas, "#0d294b");
    assert_eq!(colors.primary.main, "#0073bc");
    assert_eq!(colors.primary.shade, "rgb(38, 136, 198)");
    assert_eq!(colors.primary.contrast_text, "#ffffff");
    // The secondary block in the fixture leaves shade/text to accent steps.
    assert_eq!(colors.secondary.main, "rgba(210, 220, 230, 0.16)");
    assert_eq!(colors.secondary.shade, "rgba(210, 220, 230, 0.2)");
    // Border leaves compose over the border accent unless supplied.
    assert_eq!(colors.border.weak, "rgba(120, 140, 160, 0.12)");
    assert_eq!(colors.border.strong, "rgba(120, 140, 160, 0.5)");
    // Horizontal gradient comes from the template, vertical is a literal.
    assert_eq!(
        colors.gradients.brand_horizontal,
        "linear-gradient(90deg, #4e9ed7 0%, #0073bc 100%)"
    );
    assert_eq!(
        colors.gradients.brand_vertical,
        "linear-gradient(0deg, #0073bc 0%, #4e9ed7 100%)"
    );
    Ok(())
}

#[test]
fn sparse_branding_is_completed_by_derivation() -> anyhow::Result<()> {
    let brand: BrandOverride =
        serde_json::from_value(tinct_test_support::fixtures::sparse_brand_document())?;
    let input = ThemeColorsInput {
        mode: Some(ThemeMode::Custom),
        ..ThemeColorsInput::default()
    };
    let colors = create_colors(input, Some(&brand))?;
    assert_eq!(colors.error.main, "#d10e5c");
    assert_eq!(colors.error.shade, tinct_color::lighten("#d10e5c", 0.15)?);
    assert_eq!(colors.gradients.brand_horizontal, {
        let silver = tinct_theme::Gradient {
            color_a: palette::SILVER_LIGHT.to_string(),
            color_b: palette::SILVER_DARK.to_string(),
            all: None,
        };
        gradient::resolve(gradient::HORIZONTAL_TEMPLATE, &silver)
    });
    Ok(())
}

#[test]
fn custom_mode_without_branding_matches_dark() -> anyhow::Result<()> {
    let requested = ThemeColorsInput {
        mode: Some(ThemeMode::Custom),
        ..ThemeColorsInput::default()
    };
    let fallback = create_colors(requested, None)?;
    let dark = create_colors(ThemeColorsInput::default(), None)?;
    assert_eq!(fallback, dark);
    Ok(())
}

#[tokio::test]
async fn fetch_failure_degrades_custom_builds_to_dark() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/frontend/settings");
        then.status(500);
    });

    let loader = BrandLoader::new(SettingsEndpoint::new(server.base_url(), "admin:admin")?)?;
    assert!(loader.ensure_loaded().await.is_err());

    let requested = ThemeColorsInput {
        mode: Some(ThemeMode::Custom),
        ..ThemeColorsInput::default()
    };
    let custom = create_colors(requested, loader.cached())?;
    let dark = create_colors(ThemeColorsInput::default(), None)?;
    assert_eq!(custom, dark);
    Ok(())
}

#[test]
fn contrast_text_returns_a_reference_meeting_the_threshold() -> anyhow::Result<()> {
    let colors = create_colors(ThemeColorsInput::default(), None)?;
    for background in ["#0073bc", "#f5b73d", "#111217", "#f4f5f5"] {
        let chosen = colors.contrast_text(background, None)?;
        assert!(chosen == palette::MAX_CONTRAST_ON_DARK || chosen == palette::MAX_CONTRAST_ON_LIGHT);
        let white = tinct_color::contrast_ratio(palette::MAX_CONTRAST_ON_DARK, background, None)?;
        let black = tinct_color::contrast_ratio(palette::MAX_CONTRAST_ON_LIGHT, background, None)?;
        if white.max(black) >= colors.contrast_threshold {
            let ratio = tinct_color::contrast_ratio(chosen, background, None)?;
            assert!(ratio >= colors.contrast_threshold);
        }
    }
    Ok(())
}

#[test]
fn contrast_text_honors_a_per_call_threshold() -> anyhow::Result<()> {
    let colors = create_colors(ThemeColorsInput::default(), None)?;
    // White on this mid blue sits around 5:1: acceptable at the build
    // default, insufficient at a stricter per-call threshold.
    let relaxed = colors.contrast_text("#0073bc", None)?;
    assert_eq!(relaxed, palette::MAX_CONTRAST_ON_DARK);
    let strict = colors.contrast_text("#0073bc", Some(7.0))?;
    assert_eq!(strict, palette::MAX_CONTRAST_ON_LIGHT);
    Ok(())
}

#[test]
fn emphasize_uses_the_effective_hover_factor() -> anyhow::Result<()> {
    let colors = create_colors(ThemeColorsInput::default(), None)?;
    assert_eq!(
        colors.emphasize("#0073bc", None)?,
        tinct_color::emphasize("#0073bc", colors.hover_factor)?
    );
    assert_eq!(
        colors.emphasize("#0073bc", Some(0.2))?,
        tinct_color::emphasize("#0073bc", 0.2)?
    );
    Ok(())
}
