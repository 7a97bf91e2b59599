use inbox_config::StoreConfig;
use inbox_persistence_supabase::{SupabaseDatabase, SupabaseDatabaseConfig};

pub fn connect(config: &StoreConfig) -> anyhow::Result<SupabaseDatabase> {
    SupabaseDatabase::connect(SupabaseDatabaseConfig {
        url: config.url.clone(),
        secret: config.secret.clone(),
        contact_table: config.table.clone(),
    })
}
