pub mod account_data;
pub mod cipher_text;
pub mod collections;
pub mod device_lists;
pub mod direct_content;
pub mod encrypted_content;
pub mod ephemeral;
pub mod event;
pub mod invited_room;
pub mod joined_room;
pub mod knocked_room;
pub mod left_room;
pub mod membership_event_content;
pub mod presence_content;
pub mod room_avatar_content;
pub mod room_name_content;
pub mod rooms;
pub mod state;
pub mod sync_response;
pub mod timeline;
pub mod to_device;
pub mod typing_content;
pub mod unread_notifications;

pub use account_data::*;
pub use cipher_text::*;
pub use collections::*;
pub use device_lists::*;
pub use direct_content::*;
pub use encrypted_content::*;
pub use ephemeral::*;
pub use event::*;
pub use invited_room::*;
pub use joined_room::*;
pub use knocked_room::*;
pub use left_room::*;
pub use membership_event_content::*;
pub use presence_content::*;
pub use room_avatar_content::*;
pub use room_name_content::*;
pub use rooms::*;
pub use state::*;
pub use sync_response::*;
pub use timeline::*;
pub use to_device::*;
pub use typing_content::*;
pub use unread_notifications::*;
