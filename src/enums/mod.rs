mod server_technology;

pub use server_technology::ServerTechnology;
