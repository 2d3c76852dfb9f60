use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Error de configuración: {message}"),
            AppError::Network(message) => write!(formatter, "Error de red: {message}"),
            AppError::Timeout(message) => write!(formatter, "{message}"),
            AppError::Http { status, message } => {
                write!(formatter, "La solicitud falló ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Error de respuesta: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Error de solicitud: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_errors_surface_status_and_message() {
        let err = AppError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "La solicitud falló (500): boom");
    }
}
