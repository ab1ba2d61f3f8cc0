mod automatic;
mod helpers;
mod ignition;
mod inputs;
mod manual;
mod scripted;
