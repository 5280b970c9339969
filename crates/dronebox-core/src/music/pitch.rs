//! Buzzer pitches in Hz, B0 through D#8.
//!
//! `S` marks a sharp: `CS4` is C#4. Values share the `i32` type of the
//! encoded melody tables so they can sit next to duration codes.

pub const REST: i32 = 0;

pub const B0: i32 = 31;
pub const C1: i32 = 33;
pub const CS1: i32 = 35;
pub const D1: i32 = 37;
pub const DS1: i32 = 39;
pub const E1: i32 = 41;
pub const F1: i32 = 44;
pub const FS1: i32 = 46;
pub const G1: i32 = 49;
pub const GS1: i32 = 52;
pub const A1: i32 = 55;
pub const AS1: i32 = 58;
pub const B1: i32 = 62;
pub const C2: i32 = 65;
pub const CS2: i32 = 69;
pub const D2: i32 = 73;
pub const DS2: i32 = 78;
pub const E2: i32 = 82;
pub const F2: i32 = 87;
pub const FS2: i32 = 93;
pub const G2: i32 = 98;
pub const GS2: i32 = 104;
pub const A2: i32 = 110;
pub const AS2: i32 = 117;
pub const B2: i32 = 123;
pub const C3: i32 = 131;
pub const CS3: i32 = 139;
pub const D3: i32 = 147;
pub const DS3: i32 = 156;
pub const E3: i32 = 165;
pub const F3: i32 = 175;
pub const FS3: i32 = 185;
pub const G3: i32 = 196;
pub const GS3: i32 = 208;
pub const A3: i32 = 220;
pub const AS3: i32 = 233;
pub const B3: i32 = 247;
pub const C4: i32 = 262;
pub const CS4: i32 = 277;
pub const D4: i32 = 294;
pub const DS4: i32 = 311;
pub const E4: i32 = 330;
pub const F4: i32 = 349;
pub const FS4: i32 = 370;
pub const G4: i32 = 392;
pub const GS4: i32 = 415;
pub const A4: i32 = 440;
pub const AS4: i32 = 466;
pub const B4: i32 = 494;
pub const C5: i32 = 523;
pub const CS5: i32 = 554;
pub const D5: i32 = 587;
pub const DS5: i32 = 622;
pub const E5: i32 = 659;
pub const F5: i32 = 698;
pub const FS5: i32 = 740;
pub const G5: i32 = 784;
pub const GS5: i32 = 831;
pub const A5: i32 = 880;
pub const AS5: i32 = 932;
pub const B5: i32 = 988;
pub const C6: i32 = 1047;
pub const CS6: i32 = 1109;
pub const D6: i32 = 1175;
pub const DS6: i32 = 1245;
pub const E6: i32 = 1319;
pub const F6: i32 = 1397;
pub const FS6: i32 = 1480;
pub const G6: i32 = 1568;
pub const GS6: i32 = 1661;
pub const A6: i32 = 1760;
pub const AS6: i32 = 1865;
pub const B6: i32 = 1976;
pub const C7: i32 = 2093;
pub const CS7: i32 = 2217;
pub const D7: i32 = 2349;
pub const DS7: i32 = 2489;
pub const E7: i32 = 2637;
pub const F7: i32 = 2794;
pub const FS7: i32 = 2960;
pub const G7: i32 = 3136;
pub const GS7: i32 = 3322;
pub const A7: i32 = 3520;
pub const AS7: i32 = 3729;
pub const B7: i32 = 3951;
pub const C8: i32 = 4186;
pub const CS8: i32 = 4435;
pub const D8: i32 = 4699;
pub const DS8: i32 = 4978;
