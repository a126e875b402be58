use crate::error::AppError;
use crate::types::activity::InfoMessage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

pub fn render(info: &InfoMessage, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(info.get_message()),
        OutputFormat::Json => Ok(serde_json::to_string(info)?),
    }
}
