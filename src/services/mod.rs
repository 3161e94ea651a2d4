//! Services module
//!
//! This module contains the clients for the external systems the bot talks to

pub mod vacancies;
pub mod viber;

pub use vacancies::{VacancyService, Vacancy, VacancyResponse};
pub use viber::{ViberService, ViberResponse, Sender};

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub viber_service: ViberService,
    pub vacancy_service: VacancyService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let viber_service = ViberService::new(&settings.bot)?;
        let vacancy_service = VacancyService::new(&settings.vacancies)?;

        Ok(Self {
            viber_service,
            vacancy_service,
        })
    }
}
