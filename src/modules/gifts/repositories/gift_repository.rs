use std::collections::BTreeMap;

use crate::modules::gifts::models::Gift;
use crate::persistence::mysql::{MySqlEntity, MySqlQuery};
use crate::persistence::{MemoryEntity, Tables};

impl MemoryEntity for Gift {
    fn table(tables: &Tables) -> &BTreeMap<String, Self> {
        &tables.gifts
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<String, Self> {
        &mut tables.gifts
    }
}

impl MySqlEntity for Gift {
    const TABLE: &'static str = "gifts";
    const COLUMNS: &'static [&'static str] = &["name", "description", "price"];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(&self.name)
            .bind(&self.description)
            .bind(self.price)
    }
}
