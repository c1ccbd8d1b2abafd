//! Partial themes and the deep-merge that applies them over the defaults.
//!
//! Every theme type has a `*Patch` mirror in which each field is optional.
//! Merging a patch replaces the leaves (colors) that are present and
//! recurses into the nested structures that are present; anything absent
//! keeps its current value.

use log::*;
use serde::{Deserialize, Serialize};

use super::models::{
    ContentTheme, FullTheme, ProgressBarTheme, StatusThemeSet, StepTheme, TextTheme, ThemeColors,
};
use super::parser::SerializableColor;

/// Deep-merge of a partial value into `self`.
pub trait Merge {
    type Patch;

    /// Merge `patch` into `self` in place and return `self`.
    fn merge(&mut self, patch: &Self::Patch) -> &mut Self;
}

fn merge_leaf<T: Copy>(target: &mut T, source: Option<T>) {
    if let Some(value) = source {
        *target = value;
    }
}

fn merge_optional_leaf<T: Copy>(target: &mut Option<T>, source: Option<T>) {
    if source.is_some() {
        *target = source;
    }
}

fn merge_nested<T: Merge>(target: &mut T, source: &Option<T::Patch>) {
    if let Some(patch) = source {
        target.merge(patch);
    }
}

/// Merge into an optional structure, creating an empty one first when the
/// target does not have it yet.
fn merge_optional<T: Merge + Default>(target: &mut Option<T>, source: &Option<T::Patch>) {
    if let Some(patch) = source {
        target.get_or_insert_with(T::default).merge(patch);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeColorsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<SerializableColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<SerializableColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<SerializableColor>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressBarPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<SerializableColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<SerializableColor>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<SerializableColor>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ContentPatch {
    #[serde(alias = "step_number", skip_serializing_if = "Option::is_none")]
    pub step_number: Option<TextPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TextPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ThemeColorsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<TextPatch>,
}

/// Partial [`StatusThemeSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatusPatch<P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<P>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<P>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<P>,
}

// Derived Default would require `P: Default`
impl<P> Default for StatusPatch<P> {
    fn default() -> Self {
        Self {
            pending: None,
            progress: None,
            completed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct StepThemePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<StatusPatch<ThemeColorsPatch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<StatusPatch<ContentPatch>>,
    #[serde(alias = "progress_bar", skip_serializing_if = "Option::is_none")]
    pub progress_bar: Option<StatusPatch<ProgressBarPatch>>,
}

/// A partial [`FullTheme`], as supplied by users or theme files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<StepThemePatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<StepThemePatch>,
}

impl ThemePatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self == &ThemePatch::default()
    }
}

impl Merge for ThemeColors {
    type Patch = ThemeColorsPatch;

    fn merge(&mut self, patch: &ThemeColorsPatch) -> &mut Self {
        merge_leaf(&mut self.background, patch.background);
        merge_leaf(&mut self.color, patch.color);
        merge_optional_leaf(&mut self.fill, patch.fill);
        self
    }
}

impl Merge for ProgressBarTheme {
    type Patch = ProgressBarPatch;

    fn merge(&mut self, patch: &ProgressBarPatch) -> &mut Self {
        merge_leaf(&mut self.background, patch.background);
        merge_optional_leaf(&mut self.fill, patch.fill);
        self
    }
}

impl Merge for TextTheme {
    type Patch = TextPatch;

    fn merge(&mut self, patch: &TextPatch) -> &mut Self {
        merge_leaf(&mut self.color, patch.color);
        self
    }
}

impl Merge for ContentTheme {
    type Patch = ContentPatch;

    fn merge(&mut self, patch: &ContentPatch) -> &mut Self {
        merge_nested(&mut self.step_number, &patch.step_number);
        merge_nested(&mut self.title, &patch.title);
        merge_nested(&mut self.status, &patch.status);
        merge_nested(&mut self.description, &patch.description);
        self
    }
}

impl<T: Merge> Merge for StatusThemeSet<T> {
    type Patch = StatusPatch<T::Patch>;

    fn merge(&mut self, patch: &Self::Patch) -> &mut Self {
        merge_nested(&mut self.pending, &patch.pending);
        merge_nested(&mut self.progress, &patch.progress);
        merge_nested(&mut self.completed, &patch.completed);
        self
    }
}

impl Merge for StepTheme {
    type Patch = StepThemePatch;

    fn merge(&mut self, patch: &StepThemePatch) -> &mut Self {
        merge_nested(&mut self.step, &patch.step);
        merge_nested(&mut self.content, &patch.content);
        merge_nested(&mut self.progress_bar, &patch.progress_bar);
        self
    }
}

impl Merge for FullTheme {
    type Patch = ThemePatch;

    fn merge(&mut self, patch: &ThemePatch) -> &mut Self {
        merge_nested(&mut self.light, &patch.light);
        merge_nested(&mut self.dark, &patch.dark);
        self
    }
}

// Patches merge into patches too, so overlays can be layered: the later one
// wins leaf by leaf.

impl Merge for ThemeColorsPatch {
    type Patch = ThemeColorsPatch;

    fn merge(&mut self, patch: &ThemeColorsPatch) -> &mut Self {
        merge_optional_leaf(&mut self.background, patch.background);
        merge_optional_leaf(&mut self.color, patch.color);
        merge_optional_leaf(&mut self.fill, patch.fill);
        self
    }
}

impl Merge for ProgressBarPatch {
    type Patch = ProgressBarPatch;

    fn merge(&mut self, patch: &ProgressBarPatch) -> &mut Self {
        merge_optional_leaf(&mut self.background, patch.background);
        merge_optional_leaf(&mut self.fill, patch.fill);
        self
    }
}

impl Merge for TextPatch {
    type Patch = TextPatch;

    fn merge(&mut self, patch: &TextPatch) -> &mut Self {
        merge_optional_leaf(&mut self.color, patch.color);
        self
    }
}

impl Merge for ContentPatch {
    type Patch = ContentPatch;

    fn merge(&mut self, patch: &ContentPatch) -> &mut Self {
        merge_optional(&mut self.step_number, &patch.step_number);
        merge_optional(&mut self.title, &patch.title);
        merge_optional(&mut self.status, &patch.status);
        merge_optional(&mut self.description, &patch.description);
        self
    }
}

impl<P: Merge<Patch = P> + Default> Merge for StatusPatch<P> {
    type Patch = StatusPatch<P>;

    fn merge(&mut self, patch: &StatusPatch<P>) -> &mut Self {
        merge_optional(&mut self.pending, &patch.pending);
        merge_optional(&mut self.progress, &patch.progress);
        merge_optional(&mut self.completed, &patch.completed);
        self
    }
}

impl Merge for StepThemePatch {
    type Patch = StepThemePatch;

    fn merge(&mut self, patch: &StepThemePatch) -> &mut Self {
        merge_optional(&mut self.step, &patch.step);
        merge_optional(&mut self.content, &patch.content);
        merge_optional(&mut self.progress_bar, &patch.progress_bar);
        self
    }
}

impl Merge for ThemePatch {
    type Patch = ThemePatch;

    fn merge(&mut self, patch: &ThemePatch) -> &mut Self {
        merge_optional(&mut self.light, &patch.light);
        merge_optional(&mut self.dark, &patch.dark);
        self
    }
}

impl FullTheme {
    /// A fresh copy of the built-in theme with `patch` merged over it.
    pub fn resolve(patch: &ThemePatch) -> FullTheme {
        let mut theme = FullTheme::default();
        if !patch.is_empty() {
            trace!("Merging custom theme over defaults: {:?}", patch);
            theme.merge(patch);
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::models::Status;
    use enum_iterator::all;
    use ratatui::style::Color;

    fn pending_step_background(color: u32) -> ThemePatch {
        ThemePatch {
            light: Some(StepThemePatch {
                step: Some(StatusPatch {
                    pending: Some(ThemeColorsPatch {
                        background: Some(SerializableColor::rgb(color)),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn merge_empty_patch_keeps_defaults() {
        let mut theme = FullTheme::default();
        theme.merge(&ThemePatch::default());
        assert_eq!(theme, FullTheme::default());
        assert_eq!(FullTheme::resolve(&ThemePatch::default()), FullTheme::default());
    }

    #[test]
    fn merge_changes_only_the_given_leaf() {
        let theme = FullTheme::resolve(&pending_step_background(0x000000));
        let default = FullTheme::default();

        assert_eq!(theme.light.step.pending.background(), Color::Rgb(0, 0, 0));
        assert_eq!(theme.light.step.pending.color, default.light.step.pending.color);
        assert_eq!(theme.dark.step.pending.color, default.dark.step.pending.color);
        assert_eq!(theme.dark, default.dark);
        assert_eq!(theme.light.content, default.light.content);
        assert_eq!(theme.light.progress_bar, default.light.progress_bar);
        for status in all::<Status>().filter(|s| *s != Status::Pending) {
            assert_eq!(theme.light.step[status], default.light.step[status]);
        }
    }

    #[test]
    fn merge_is_idempotent() {
        let patch = pending_step_background(0x123456);
        let mut once = FullTheme::default();
        once.merge(&patch);
        let mut twice = once.clone();
        twice.merge(&patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_returns_the_target() {
        let mut theme = FullTheme::default();
        let returned = theme.merge(&pending_step_background(0x010203)).clone();
        assert_eq!(returned, theme);
    }

    #[test]
    fn merge_adds_missing_fill() {
        let patch = ThemePatch {
            dark: Some(StepThemePatch {
                progress_bar: Some(StatusPatch {
                    pending: Some(ProgressBarPatch {
                        fill: Some(SerializableColor(Color::Red)),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let theme = FullTheme::resolve(&patch);
        assert_eq!(theme.dark.progress_bar.pending.fill(), Some(Color::Red));
        assert_eq!(
            theme.dark.progress_bar.pending.background,
            FullTheme::default().dark.progress_bar.pending.background
        );
    }

    #[test]
    fn patch_merge_creates_missing_branches() {
        let mut base = ThemePatch::default();
        base.merge(&pending_step_background(0xaaaaaa));
        assert_eq!(base, pending_step_background(0xaaaaaa));

        // a later overlay wins leaf by leaf and keeps sibling leaves
        let mut later = pending_step_background(0xbbbbbb);
        if let Some(pending) = later
            .light
            .as_mut()
            .and_then(|l| l.step.as_mut())
            .and_then(|s| s.pending.as_mut())
        {
            pending.color = Some(SerializableColor(Color::Blue));
        }
        base.merge(&later);
        let pending = base.light.unwrap().step.unwrap().pending.unwrap();
        assert_eq!(pending.background, Some(SerializableColor::rgb(0xbbbbbb)));
        assert_eq!(pending.color, Some(SerializableColor(Color::Blue)));
    }

    #[test]
    fn resolve_always_starts_from_defaults() {
        let first = FullTheme::resolve(&pending_step_background(0x111111));
        let second = FullTheme::resolve(&ThemePatch::default());
        assert_ne!(first, second);
        assert_eq!(second, FullTheme::default());
    }
}
