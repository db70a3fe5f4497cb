//! Header content rendering.
//!
//! A [`Renderer`] turns a day or minute mark into whatever the rendering layer
//! places inside a header cell. Translators produce the label text and are
//! handed to the renderer, so a renderer can restyle without relabelling.

use serde::Serialize;

use crate::models::calendar_day::CalendarDay;
use crate::utils::format::{calendar_day_to_string, minutes_to_timestamp_string};

pub const DAY_CONTENT_CLASS: &str = "ek-rwc-header-day-default";
pub const TIME_CONTENT_CLASS: &str = "ek-rwc-header-time-default";

/// Produces header content for a value of type `T`.
pub trait Renderer<T> {
    type Output;

    fn render(&self, value: T, translate: &dyn Fn(T) -> String) -> Self::Output;
}

/// Label paragraph produced by the default renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderContent {
    pub class_name: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDayRenderer;

impl Renderer<CalendarDay> for DefaultDayRenderer {
    type Output = HeaderContent;

    fn render(&self, day: CalendarDay, translate: &dyn Fn(CalendarDay) -> String) -> HeaderContent {
        HeaderContent {
            class_name: DAY_CONTENT_CLASS,
            text: translate(day),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTimeRenderer;

impl Renderer<i64> for DefaultTimeRenderer {
    type Output = HeaderContent;

    fn render(&self, minutes: i64, translate: &dyn Fn(i64) -> String) -> HeaderContent {
        HeaderContent {
            class_name: TIME_CONTENT_CLASS,
            text: translate(minutes),
        }
    }
}

pub type DayTranslator<'a> = Box<dyn Fn(CalendarDay) -> String + 'a>;
pub type TimeTranslator<'a> = Box<dyn Fn(i64) -> String + 'a>;

pub fn default_day_translator<'a>() -> DayTranslator<'a> {
    Box::new(|day| calendar_day_to_string(Some(day)).to_string())
}

pub fn default_time_translator<'a>() -> TimeTranslator<'a> {
    Box::new(|minutes| minutes_to_timestamp_string(minutes as f64))
}

/// Translators and renderers used for one layout build.
pub struct HeaderRenderers<'a, D, T> {
    pub translate_day: DayTranslator<'a>,
    pub translate_time: TimeTranslator<'a>,
    pub day_renderer: D,
    pub time_renderer: T,
}

impl<'a, D, T> HeaderRenderers<'a, D, T>
where
    D: Renderer<CalendarDay>,
    T: Renderer<i64>,
{
    /// Custom renderers with the default translators.
    pub fn new(day_renderer: D, time_renderer: T) -> Self {
        Self {
            translate_day: default_day_translator(),
            translate_time: default_time_translator(),
            day_renderer,
            time_renderer,
        }
    }

    pub fn with_day_translator(mut self, translate: impl Fn(CalendarDay) -> String + 'a) -> Self {
        self.translate_day = Box::new(translate);
        self
    }

    pub fn with_time_translator(mut self, translate: impl Fn(i64) -> String + 'a) -> Self {
        self.translate_time = Box::new(translate);
        self
    }

    pub fn render_day(&self, day: CalendarDay) -> D::Output {
        self.day_renderer.render(day, self.translate_day.as_ref())
    }

    pub fn render_time(&self, minutes: i64) -> T::Output {
        self.time_renderer.render(minutes, self.translate_time.as_ref())
    }
}

/// Renderers producing [`HeaderContent`] labels.
pub type DefaultRenderers<'a> = HeaderRenderers<'a, DefaultDayRenderer, DefaultTimeRenderer>;

impl Default for DefaultRenderers<'_> {
    fn default() -> Self {
        Self::new(DefaultDayRenderer, DefaultTimeRenderer)
    }
}
