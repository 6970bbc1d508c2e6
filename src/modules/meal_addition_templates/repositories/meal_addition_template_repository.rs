use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::modules::meal_addition_templates::models::{
    MealAdditionTemplate, MealAdditionTemplateRelation,
};
use crate::modules::restaurants::models::Restaurant;
use crate::persistence::mysql::{fetch_by_keys, MySqlEntity, MySqlQuery};
use crate::persistence::{MemoryEntity, Tables};

impl MemoryEntity for MealAdditionTemplate {
    fn table(tables: &Tables) -> &BTreeMap<String, Self> {
        &tables.meal_addition_templates
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<String, Self> {
        &mut tables.meal_addition_templates
    }

    fn hydrate(&mut self, tables: &Tables, includes: &BTreeSet<MealAdditionTemplateRelation>) {
        self.restaurant = if includes.contains(&MealAdditionTemplateRelation::Restaurant) {
            tables.restaurants.get(&self.restaurant_id).cloned()
        } else {
            None
        };
    }

    fn check_references(&self, tables: &Tables) -> Result<(), String> {
        if tables.restaurants.contains_key(&self.restaurant_id) {
            Ok(())
        } else {
            Err(format!(
                "MealAdditionTemplate '{}' references unknown Restaurant '{}'",
                self.id, self.restaurant_id
            ))
        }
    }
}

#[async_trait]
impl MySqlEntity for MealAdditionTemplate {
    const TABLE: &'static str = "meal_addition_templates";
    const COLUMNS: &'static [&'static str] = &["guest_type", "meal_type", "notes", "restaurant_id"];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(self.guest_type)
            .bind(self.meal_type)
            .bind(&self.notes)
            .bind(&self.restaurant_id)
    }

    async fn load_relations(
        templates: &mut [Self],
        includes: &BTreeSet<MealAdditionTemplateRelation>,
        pool: &MySqlPool,
    ) -> Result<(), sqlx::Error> {
        if !includes.contains(&MealAdditionTemplateRelation::Restaurant) {
            return Ok(());
        }

        let restaurant_ids: Vec<String> =
            templates.iter().map(|t| t.restaurant_id.clone()).collect();
        let restaurants = fetch_by_keys::<Restaurant>(pool, restaurant_ids).await?;
        for template in templates.iter_mut() {
            template.restaurant = restaurants.get(&template.restaurant_id).cloned();
        }
        Ok(())
    }
}
