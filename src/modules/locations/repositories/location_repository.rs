use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::modules::locations::models::{City, CityRelation, Country};
use crate::persistence::mysql::{fetch_by_keys, MySqlEntity, MySqlQuery};
use crate::persistence::{MemoryEntity, Tables};

impl MemoryEntity for Country {
    fn table(tables: &Tables) -> &BTreeMap<String, Self> {
        &tables.countries
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<String, Self> {
        &mut tables.countries
    }

    fn dependents(key: &String, tables: &Tables) -> usize {
        tables.cities.values().filter(|city| &city.country_id == key).count()
    }
}

impl MemoryEntity for City {
    fn table(tables: &Tables) -> &BTreeMap<String, Self> {
        &tables.cities
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<String, Self> {
        &mut tables.cities
    }

    fn hydrate(&mut self, tables: &Tables, includes: &BTreeSet<CityRelation>) {
        self.country = if includes.contains(&CityRelation::Country) {
            tables.countries.get(&self.country_id).cloned()
        } else {
            None
        };
    }

    fn check_references(&self, tables: &Tables) -> Result<(), String> {
        if tables.countries.contains_key(&self.country_id) {
            Ok(())
        } else {
            Err(format!(
                "City '{}' references unknown Country '{}'",
                self.id, self.country_id
            ))
        }
    }

    fn dependents(key: &String, tables: &Tables) -> usize {
        tables.airports.values().filter(|airport| &airport.city_id == key).count()
    }
}

impl MySqlEntity for Country {
    const TABLE: &'static str = "countries";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query.bind(&self.name)
    }
}

#[async_trait]
impl MySqlEntity for City {
    const TABLE: &'static str = "cities";
    const COLUMNS: &'static [&'static str] = &["name", "country_id"];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query.bind(&self.name).bind(&self.country_id)
    }

    async fn load_relations(
        cities: &mut [Self],
        includes: &BTreeSet<CityRelation>,
        pool: &MySqlPool,
    ) -> Result<(), sqlx::Error> {
        if !includes.contains(&CityRelation::Country) {
            return Ok(());
        }

        let country_ids: Vec<String> = cities.iter().map(|c| c.country_id.clone()).collect();
        let countries = fetch_by_keys::<Country>(pool, country_ids).await?;
        for city in cities.iter_mut() {
            city.country = countries.get(&city.country_id).cloned();
        }
        Ok(())
    }
}
