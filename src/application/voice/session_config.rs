//! Realtime session configuration sent to the provider
//!
//! The tool declarations mirror the HTTP operations the browser client
//! calls back into when the model invokes a function.

use serde_json::{json, Value};

use crate::config::{RestaurantConfig, VoiceConfig};
use crate::domain::MenuCategory;

const TRANSCRIPTION_MODEL: &str = "whisper-1";
const VAD_THRESHOLD: f64 = 0.48;
const VAD_PREFIX_PADDING_MS: u32 = 300;
const VAD_SILENCE_MS: u32 = 1000;
const TEMPERATURE: f64 = 0.8;
const MAX_OUTPUT_TOKENS: u32 = 2048;

const DIETARY_FLAGS: [&str; 4] = ["vegetarian", "vegan", "gluten-free", "dairy-free"];

pub fn instructions(restaurant: &RestaurantConfig) -> String {
    format!(
        "You are the friendly phone host of {name}, a Maltese restaurant in {city}. \
Speak warmly and briefly, one question at a time, and confirm details back to the caller.\n\
\n\
You can:\n\
- check table availability and book tables (ask for name, phone number, date, time and party size),\n\
- cancel a reservation when the caller gives their confirmation code and phone number,\n\
- describe the menu by category or dietary need,\n\
- check a dish for allergens before recommending it,\n\
- take pickup or delivery orders (delivery needs an address).\n\
\n\
Always check availability before booking. Read confirmation codes and order numbers back \
slowly, character by character. Dates are YYYY-MM-DD and times are 24-hour HH:MM when you \
call a tool. Never guess about allergens: use check_allergens, and if a check fails ask \
the caller to phone us on {phone}. Do not take payment details.",
        name = restaurant.name,
        city = restaurant.city,
        phone = restaurant.phone,
    )
}

pub fn tools() -> Value {
    let categories: Vec<&str> = MenuCategory::ALL.iter().map(|c| c.as_str()).collect();
    json!([
        {
            "type": "function",
            "name": "check_table_availability",
            "description": "Check whether a table is free for a party at a date and time.",
            "parameters": {
                "type": "object",
                "properties": {
                    "date": { "type": "string", "description": "Date as YYYY-MM-DD" },
                    "time": { "type": "string", "description": "Time as HH:MM, 24-hour" },
                    "party_size": { "type": "integer", "description": "Number of guests" }
                },
                "required": ["date", "time", "party_size"]
            }
        },
        {
            "type": "function",
            "name": "create_reservation",
            "description": "Book a table once availability has been confirmed.",
            "parameters": {
                "type": "object",
                "properties": {
                    "customer_name": { "type": "string" },
                    "customer_phone": { "type": "string" },
                    "customer_email": { "type": "string" },
                    "party_size": { "type": "integer" },
                    "reservation_date": { "type": "string", "description": "Date as YYYY-MM-DD" },
                    "reservation_time": { "type": "string", "description": "Time as HH:MM, 24-hour" },
                    "special_requests": { "type": "string" },
                    "dietary_restrictions": { "type": "array", "items": { "type": "string" } },
                    "occasion": { "type": "string", "description": "Birthday, anniversary, ..." }
                },
                "required": [
                    "customer_name",
                    "customer_phone",
                    "party_size",
                    "reservation_date",
                    "reservation_time"
                ]
            }
        },
        {
            "type": "function",
            "name": "get_menu_items",
            "description": "List available dishes, optionally by category or dietary need.",
            "parameters": {
                "type": "object",
                "properties": {
                    "category": { "type": "string", "enum": categories },
                    "dietary_filter": { "type": "string", "enum": DIETARY_FLAGS }
                }
            }
        },
        {
            "type": "function",
            "name": "check_allergens",
            "description": "Check whether a dish contains any of the given allergens.",
            "parameters": {
                "type": "object",
                "properties": {
                    "item_name": { "type": "string" },
                    "allergens": { "type": "array", "items": { "type": "string" } }
                },
                "required": ["item_name", "allergens"]
            }
        },
        {
            "type": "function",
            "name": "create_order",
            "description": "Place a pickup or delivery order.",
            "parameters": {
                "type": "object",
                "properties": {
                    "customer_name": { "type": "string" },
                    "customer_phone": { "type": "string" },
                    "order_type": { "type": "string", "enum": ["delivery", "pickup"] },
                    "items": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "item_name": { "type": "string" },
                                "quantity": { "type": "integer" },
                                "modifications": { "type": "string" }
                            },
                            "required": ["item_name", "quantity"]
                        }
                    },
                    "delivery_address": { "type": "string" },
                    "special_instructions": { "type": "string" }
                },
                "required": ["customer_name", "customer_phone", "order_type", "items"]
            }
        },
        {
            "type": "function",
            "name": "cancel_reservation",
            "description": "Cancel a reservation by confirmation code.",
            "parameters": {
                "type": "object",
                "properties": {
                    "confirmation_code": { "type": "string" },
                    "customer_phone": { "type": "string" },
                    "reason": { "type": "string" }
                },
                "required": ["confirmation_code", "customer_phone"]
            }
        }
    ])
}

/// Full body of the provider's create-session request.
pub fn session_config(restaurant: &RestaurantConfig, voice: &VoiceConfig) -> Value {
    json!({
        "model": voice.model,
        "voice": voice.voice,
        "instructions": instructions(restaurant),
        "input_audio_transcription": { "model": TRANSCRIPTION_MODEL },
        "turn_detection": {
            "type": "server_vad",
            "threshold": VAD_THRESHOLD,
            "prefix_padding_ms": VAD_PREFIX_PADDING_MS,
            "silence_duration_ms": VAD_SILENCE_MS
        },
        "modalities": ["text", "audio"],
        "temperature": TEMPERATURE,
        "max_response_output_tokens": MAX_OUTPUT_TOKENS,
        "tools": tools(),
        "tool_choice": "auto"
    })
}
