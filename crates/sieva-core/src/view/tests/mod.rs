mod derive;
