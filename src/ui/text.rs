use std::io::{self, Write};

use crate::{
    app::{
        state::SearchFailure,
        view::{CurrentView, DayCard, DayDetail, HourCard, NearbyCard},
    },
    ui::ViewRenderer,
};

/// Plain-text dashboard written section by section to any writer.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    show_icons: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_icons: false,
        }
    }

    /// Append icon URLs to each line.
    #[must_use]
    pub fn with_icons(mut self, show_icons: bool) -> Self {
        self.show_icons = show_icons;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn icon_suffix(&self, url: &str) -> String {
        if self.show_icons {
            format!("  {url}")
        } else {
            String::new()
        }
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{}", "-".repeat(title.chars().count()))
    }

    fn hour_lines(&mut self, hours: &[HourCard]) -> io::Result<()> {
        for hour in hours {
            let icon = self.icon_suffix(&hour.icon_url);
            writeln!(
                self.out,
                "  {}  {:>9} / {:<9}  {}  {}{icon}",
                hour.time, hour.temperature, hour.feels_like, hour.wind, hour.description
            )?;
        }
        Ok(())
    }
}

impl<W: Write> ViewRenderer for TextRenderer<W> {
    fn render_current(&mut self, view: &CurrentView) -> io::Result<()> {
        let icon = self.icon_suffix(&view.icon_url);
        writeln!(self.out, "{}  {}", view.title, view.date)?;
        writeln!(self.out, "  {}{icon}", view.description)?;
        writeln!(self.out, "  {}  ({})", view.temperature, view.feels_like)?;
        writeln!(self.out, "  Восход: {}", view.sunrise)?;
        writeln!(self.out, "  Закат: {}", view.sunset)?;
        writeln!(self.out, "  Продолжительность дня: {}", view.day_length)
    }

    fn render_hourly(&mut self, hours: &[HourCard]) -> io::Result<()> {
        self.heading("Ближайшие часы")?;
        self.hour_lines(hours)
    }

    fn render_forecast_days(&mut self, cards: &[DayCard], selected: usize) -> io::Result<()> {
        self.heading("Прогноз на 5 дней")?;
        for (index, card) in cards.iter().enumerate() {
            let marker = if index == selected { '>' } else { ' ' };
            let icon = self.icon_suffix(&card.icon_url);
            writeln!(
                self.out,
                "{marker} {}. {:<11} {}  {:>9}  {}{icon}",
                index + 1,
                card.weekday,
                card.date,
                card.temperature,
                card.description
            )?;
        }
        Ok(())
    }

    fn render_day_detail(&mut self, detail: &DayDetail) -> io::Result<()> {
        self.heading(&detail.heading)?;
        self.hour_lines(&detail.hours)
    }

    fn render_nearby(&mut self, cards: &[NearbyCard]) -> io::Result<()> {
        if cards.is_empty() {
            return Ok(());
        }
        self.heading("Рядом")?;
        for card in cards {
            let icon = self.icon_suffix(&card.icon_url);
            writeln!(self.out, "  {:<20} {}{icon}", card.name, card.temperature)?;
        }
        Ok(())
    }

    fn render_error(&mut self, failure: &SearchFailure) -> io::Result<()> {
        match failure {
            SearchFailure::NotFound { query } => {
                writeln!(
                    self.out,
                    "Город \"{query}\" не найден в базе данных ресурса."
                )?;
                writeln!(self.out, "Введите, пожалуйста, другой город.")
            }
            SearchFailure::GenericFailure => {
                writeln!(self.out, "Не удалось получить данные о погоде.")
            }
        }
    }
}
