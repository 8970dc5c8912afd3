// Record hubs: job descriptions, branding assets, candidate feedback, and
// coaching materials. Each is a save + list pair over one table.

pub mod handlers;
