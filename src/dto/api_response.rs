use serde::Serialize;

/// Sobre común de las respuestas de la API
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

/// Página de resultados con el total sin paginar
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: usize, page: u32, limit: u32) -> Self {
        let total_pages = (total as u64).div_ceil(u64::from(limit.max(1)));
        Self {
            items,
            total,
            page,
            limit,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PaginatedResponse::<u8>::new(vec![], 0, 1, 10).total_pages, 0);
        assert_eq!(PaginatedResponse::<u8>::new(vec![], 10, 1, 10).total_pages, 1);
        assert_eq!(PaginatedResponse::<u8>::new(vec![], 11, 2, 10).total_pages, 2);
    }
}
