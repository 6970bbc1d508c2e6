use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::modules::airports::models::{Airport, AirportRelation};
use crate::modules::locations::models::{City, CityRelation};
use crate::persistence::mysql::{fetch_by_keys, MySqlEntity, MySqlQuery};
use crate::persistence::{MemoryEntity, Tables};

/// Relations to load on the airport's city, if the city is wanted at all.
fn city_includes(includes: &BTreeSet<AirportRelation>) -> Option<BTreeSet<CityRelation>> {
    if includes.contains(&AirportRelation::CityCountry) {
        Some(BTreeSet::from([CityRelation::Country]))
    } else if includes.contains(&AirportRelation::City) {
        Some(BTreeSet::new())
    } else {
        None
    }
}

impl MemoryEntity for Airport {
    fn table(tables: &Tables) -> &BTreeMap<String, Self> {
        &tables.airports
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<String, Self> {
        &mut tables.airports
    }

    fn hydrate(&mut self, tables: &Tables, includes: &BTreeSet<AirportRelation>) {
        self.city = city_includes(includes).and_then(|city_includes| {
            tables.cities.get(&self.city_id).cloned().map(|mut city| {
                city.hydrate(tables, &city_includes);
                city
            })
        });
    }

    fn check_references(&self, tables: &Tables) -> Result<(), String> {
        if tables.cities.contains_key(&self.city_id) {
            Ok(())
        } else {
            Err(format!(
                "Airport '{}' references unknown City '{}'",
                self.id, self.city_id
            ))
        }
    }
}

#[async_trait]
impl MySqlEntity for Airport {
    const TABLE: &'static str = "airports";
    const COLUMNS: &'static [&'static str] = &["name", "code", "description", "city_id"];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(&self.name)
            .bind(&self.code)
            .bind(&self.description)
            .bind(&self.city_id)
    }

    async fn load_relations(
        airports: &mut [Self],
        includes: &BTreeSet<AirportRelation>,
        pool: &MySqlPool,
    ) -> Result<(), sqlx::Error> {
        let Some(city_includes) = city_includes(includes) else {
            return Ok(());
        };

        let city_ids: Vec<String> = airports.iter().map(|a| a.city_id.clone()).collect();
        let mut cities: Vec<City> = fetch_by_keys::<City>(pool, city_ids)
            .await?
            .into_values()
            .collect();
        City::load_relations(&mut cities, &city_includes, pool).await?;

        let cities: BTreeMap<String, City> =
            cities.into_iter().map(|city| (city.id.clone(), city)).collect();
        for airport in airports.iter_mut() {
            airport.city = cities.get(&airport.city_id).cloned();
        }
        Ok(())
    }
}
