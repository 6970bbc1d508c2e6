use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::core::{CrudService, Failure, Outcome, Repository, Specification, Success};
use crate::modules::meal_addition_templates::models::{
    MealAdditionTemplate, MealAdditionTemplateDto, MealAdditionTemplateRelation,
};

/// CRUD operations for meal-addition templates. Reads carry the restaurant.
pub struct MealAdditionTemplateService {
    repository: Arc<dyn Repository<MealAdditionTemplate>>,
}

impl MealAdditionTemplateService {
    pub fn new(repository: Arc<dyn Repository<MealAdditionTemplate>>) -> Self {
        Self { repository }
    }

    async fn find(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<MealAdditionTemplate, Failure> {
        let spec = Specification::<MealAdditionTemplate>::by_key(id)
            .include(MealAdditionTemplateRelation::Restaurant);
        self.repository
            .first_or_default(&spec, false, cancel)
            .await?
            .ok_or_else(|| Failure::not_found::<MealAdditionTemplate>(id))
    }
}

#[async_trait]
impl CrudService for MealAdditionTemplateService {
    type Dto = MealAdditionTemplateDto;

    async fn list(&self, cancel: &CancellationToken) -> Outcome<Vec<MealAdditionTemplateDto>> {
        let spec = Specification::<MealAdditionTemplate>::all()
            .include(MealAdditionTemplateRelation::Restaurant);
        let templates = self.repository.list(&spec, false, cancel).await?;

        Ok(Success::new(
            templates
                .into_iter()
                .map(MealAdditionTemplateDto::from)
                .collect(),
        ))
    }

    async fn get(&self, id: &str, cancel: &CancellationToken) -> Outcome<MealAdditionTemplateDto> {
        let template = self.find(id, cancel).await?;
        Ok(Success::new(template.into()))
    }

    async fn create(
        &self,
        dto: MealAdditionTemplateDto,
        cancel: &CancellationToken,
    ) -> Outcome<MealAdditionTemplateDto> {
        let template = self
            .repository
            .create(MealAdditionTemplate::from_dto(dto), cancel)
            .await?;
        self.repository.save(cancel).await?;
        info!(
            id = %template.id,
            guest_type = %template.guest_type,
            meal_type = %template.meal_type,
            "Meal addition template created"
        );

        let created = match self.find(&template.id, cancel).await {
            Ok(loaded) => loaded,
            Err(failure) => {
                warn!(
                    id = %template.id,
                    error = %failure,
                    "Created meal addition template returned without its restaurant"
                );
                template
            }
        };
        let message = format!(
            "MealAdditionTemplate '{}' was successfully created",
            created.id
        );
        Ok(Success::with_message(created.into(), message))
    }

    async fn update(&self, dto: MealAdditionTemplateDto, cancel: &CancellationToken) -> Outcome {
        let mut template = self
            .repository
            .first_or_default(&Specification::by_key(dto.id.as_str()), true, cancel)
            .await?
            .ok_or_else(|| Failure::not_found::<MealAdditionTemplate>(&dto.id))?;

        template.apply(&dto);
        self.repository.update(template)?;
        self.repository.save(cancel).await?;

        info!(id = %dto.id, "Meal addition template updated");
        Ok(Success::message(format!(
            "MealAdditionTemplate '{}' was successfully updated",
            dto.id
        )))
    }

    async fn delete(&self, id: &str, cancel: &CancellationToken) -> Outcome {
        self.repository.delete(&id.to_string(), cancel).await?;
        self.repository.save(cancel).await?;

        info!(id = %id, "Meal addition template removed");
        Ok(Success::message(format!(
            "MealAdditionTemplate '{}' was successfully removed",
            id
        )))
    }
}
