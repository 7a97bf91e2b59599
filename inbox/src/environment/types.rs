use inbox_api_rest::RestServer as RestServerImpl;
use inbox_core_contact_impl::ContactFeatureServiceImpl;
use inbox_core_health_impl::HealthFeatureServiceImpl;
use inbox_email_impl::EmailServiceImpl;
use inbox_persistence_supabase::SupabaseDatabase;

// API
pub type RestServer = RestServerImpl<HealthFeature, ContactFeature>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Database, Email>;
pub type HealthFeature = HealthFeatureServiceImpl<Database, Email>;

// Persistence
pub type Database = SupabaseDatabase;

// Email
pub type Email = EmailServiceImpl;
