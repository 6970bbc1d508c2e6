use std::collections::BTreeMap;

use crate::modules::restaurants::models::Restaurant;
use crate::persistence::mysql::{MySqlEntity, MySqlQuery};
use crate::persistence::{MemoryEntity, Tables};

impl MemoryEntity for Restaurant {
    fn table(tables: &Tables) -> &BTreeMap<String, Self> {
        &tables.restaurants
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<String, Self> {
        &mut tables.restaurants
    }

    fn dependents(key: &String, tables: &Tables) -> usize {
        tables
            .meal_addition_templates
            .values()
            .filter(|template| &template.restaurant_id == key)
            .count()
    }
}

impl MySqlEntity for Restaurant {
    const TABLE: &'static str = "restaurants";
    const COLUMNS: &'static [&'static str] = &["name", "comments"];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query.bind(&self.name).bind(&self.comments)
    }
}
